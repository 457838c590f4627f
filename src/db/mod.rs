use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::{self, Document};
use std::sync::Arc;
use std::time::Duration;

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::config::Config;
use crate::errors::StoreError;
use crate::models::{Entity, Stored};

/// Document store holding one collection per record type.
///
/// Implementations must be safe for unbounded concurrent use; each call is
/// expected to acquire whatever connection it needs and release it before
/// returning, on success and on error alike.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a record and return it as stored, including its generated `_id`
    async fn insert_one(&self, collection: &str, record: Document) -> Result<Document, StoreError>;

    /// Records whose fields equal every key/value pair of `filter`.
    /// An empty filter matches all records. Order is store-defined.
    async fn find_many(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError>;

    /// Store-maintained approximate record count
    async fn count_estimated(&self, collection: &str) -> Result<u64, StoreError>;

    /// Round-trip to the store without touching any collection
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Typed access to the record store, shared by all handlers
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn RecordStore>,
}

impl Database {
    pub async fn new(config: &Config) -> Result<Self> {
        if config.uses_memory_store() {
            tracing::warn!("Using the in-memory record store; records are lost on shutdown");
            return Ok(Self::in_memory());
        }

        let store = MongoStore::connect(config).await?;
        Ok(Self::with_store(Arc::new(store)))
    }

    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::default()))
    }

    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn insert<E: Entity>(&self, record: &E) -> Result<Stored<E>, StoreError> {
        let document = bson::to_document(record)?;
        let stored = self.store.insert_one(E::COLLECTION, document).await?;
        Ok(bson::from_document(stored)?)
    }

    pub async fn find<E: Entity>(&self, filter: Document) -> Result<Vec<Stored<E>>, StoreError> {
        let documents = self.store.find_many(E::COLLECTION, filter).await?;
        documents
            .into_iter()
            .map(|document| bson::from_document(document).map_err(StoreError::from))
            .collect()
    }

    pub async fn count<E: Entity>(&self) -> Result<u64, StoreError> {
        self.store.count_estimated(E::COLLECTION).await
    }

    /// Check whether the store answers within a short timeout
    pub async fn check_health(&self) -> bool {
        match tokio::time::timeout(Duration::from_secs(5), self.store.ping()).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::warn!("Record store health check failed: {}", e);
                false
            }
            Err(_) => {
                tracing::warn!("Record store health check timed out");
                false
            }
        }
    }
}
