use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::RecordStore;
use crate::errors::StoreError;

/// In-process record store. Records keep insertion order and live only as
/// long as the process.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| record.get(key) == Some(expected))
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_one(&self, collection: &str, mut record: Document) -> Result<Document, StoreError> {
        if !record.contains_key("_id") {
            record.insert("_id", ObjectId::new());
        }

        let mut collections = self.collections.write().await;
        collections.entry(collection.to_string()).or_default().push(record.clone());
        Ok(record)
    }

    async fn find_many(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| records.iter().filter(|r| matches(r, &filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn count_estimated(&self, collection: &str) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, |records| records.len() as u64))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
