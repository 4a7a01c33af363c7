//! Narrow persistence seam for user records.
//!
//! The service only needs four calls against a single table. Production code
//! uses [`DynamoStore`]; tests substitute the in-memory store.

mod dynamo;
#[cfg(any(test, feature = "test-util"))]
mod memory;

pub use dynamo::DynamoStore;
#[cfg(any(test, feature = "test-util"))]
pub use memory::{MemoryStore, StoreOp};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::item::Item;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch one item by key. `None` (or an empty item) means no such record.
    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, StoreError>;

    /// Write the full item, replacing any existing item with the same key.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), StoreError>;

    /// Return every item in the table in the order the store yields them.
    async fn scan(&self, table_name: &str) -> Result<Vec<Item>, StoreError>;

    /// Remove the item with this key. Succeeds when nothing matches.
    async fn delete_item(&self, table_name: &str, key: Item) -> Result<(), StoreError>;
}
