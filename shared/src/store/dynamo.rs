use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::UserStore;
use crate::error::StoreError;
use crate::item::Item;

/// [`UserStore`] backed by a DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: DynamoClient,
}

impl DynamoStore {
    pub fn new(client: DynamoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserStore for DynamoStore {
    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, StoreError> {
        let result = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(StoreError::new)?;

        Ok(result.item().cloned())
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(StoreError::new)?;

        Ok(())
    }

    // Single Scan call; no LastEvaluatedKey follow-up.
    async fn scan(&self, table_name: &str) -> Result<Vec<Item>, StoreError> {
        let result = self
            .client
            .scan()
            .table_name(table_name)
            .send()
            .await
            .map_err(StoreError::new)?;

        Ok(result.items().to_vec())
    }

    async fn delete_item(&self, table_name: &str, key: Item) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(StoreError::new)?;

        Ok(())
    }
}
