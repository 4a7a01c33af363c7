use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::UserStore;
use crate::error::StoreError;
use crate::item::Item;
use crate::types::PARTITION_KEY;

/// Store operation selector for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Get,
    Put,
    Scan,
    Delete,
}

/// In-memory [`UserStore`]. Items keep insertion order per table and a put
/// with an existing key replaces the item in place.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Item>>>,
    failing: Mutex<HashSet<StoreOp>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table with items, bypassing key matching.
    pub fn with_items(table_name: &str, items: Vec<Item>) -> Self {
        let store = Self::new();
        store
            .tables
            .lock()
            .unwrap()
            .insert(table_name.to_string(), items);
        store
    }

    /// Make every subsequent call of `op` fail.
    pub fn fail_on(&self, op: StoreOp) -> &Self {
        self.failing.lock().unwrap().insert(op);
        self
    }

    pub fn items(&self, table_name: &str) -> Vec<Item> {
        self.tables
            .lock()
            .unwrap()
            .get(table_name)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self, op: StoreOp) -> Result<(), StoreError> {
        if self.failing.lock().unwrap().contains(&op) {
            return Err(StoreError::new(format!("injected {:?} failure", op)));
        }
        Ok(())
    }
}

fn matches_key(item: &Item, key: &Item) -> bool {
    key.iter().all(|(name, value)| item.get(name) == Some(value))
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, StoreError> {
        self.check(StoreOp::Get)?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .get(table_name)
            .and_then(|items| items.iter().find(|item| matches_key(item, &key)))
            .cloned())
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), StoreError> {
        self.check(StoreOp::Put)?;
        let mut tables = self.tables.lock().unwrap();
        let items = tables.entry(table_name.to_string()).or_default();
        let key = item.get(PARTITION_KEY);

        match items
            .iter_mut()
            .find(|existing| key.is_some() && existing.get(PARTITION_KEY) == key)
        {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Ok(())
    }

    async fn scan(&self, table_name: &str) -> Result<Vec<Item>, StoreError> {
        self.check(StoreOp::Scan)?;
        Ok(self.items(table_name))
    }

    async fn delete_item(&self, table_name: &str, key: Item) -> Result<(), StoreError> {
        self.check(StoreOp::Delete)?;
        let mut tables = self.tables.lock().unwrap();
        if let Some(items) = tables.get_mut(table_name) {
            items.retain(|item| !matches_key(item, &key));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::string_key;
    use aws_sdk_dynamodb::types::AttributeValue;

    fn user_item(email: &str, first_name: &str) -> Item {
        let mut item = string_key("email", email);
        item.insert("firstName".into(), AttributeValue::S(first_name.into()));
        item
    }

    #[tokio::test]
    async fn test_put_replaces_item_with_same_key() {
        let store = MemoryStore::new();
        store.put_item("users", user_item("a@b.co", "A")).await.unwrap();
        store.put_item("users", user_item("c@d.co", "C")).await.unwrap();
        store.put_item("users", user_item("a@b.co", "Z")).await.unwrap();

        let items = store.scan("users").await.unwrap();
        assert_eq!(items, vec![user_item("a@b.co", "Z"), user_item("c@d.co", "C")]);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let store = MemoryStore::new();
        store.delete_item("users", string_key("email", "nobody@x.io")).await.unwrap();
        assert!(store.items("users").is_empty());
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let store = MemoryStore::new();
        store.fail_on(StoreOp::Get);

        assert!(store.get_item("users", string_key("email", "a@b.co")).await.is_err());
        assert!(store.scan("users").await.is_ok());
    }
}
