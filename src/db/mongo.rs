use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use super::RecordStore;
use crate::config::Config;
use crate::errors::StoreError;

/// Server error code for a write that failed collection schema validation
const DOCUMENT_VALIDATION_FAILURE: i32 = 121;

/// MongoDB-backed record store.
///
/// The driver's `Client` owns a connection pool: every operation checks a
/// connection out and hands it back when the operation completes or fails.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.database_url).await.map_err(classify)?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout = Some(config.store_timeout);
        options.connect_timeout = Some(config.store_timeout);
        options.max_pool_size = Some(config.max_pool_size);

        let client = Client::with_options(options).map_err(classify)?;
        let database = client.database(&config.database_name);

        tracing::info!("Record store configured for database '{}'", config.database_name);
        Ok(Self { database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn insert_one(&self, collection: &str, mut record: Document) -> Result<Document, StoreError> {
        if !record.contains_key("_id") {
            record.insert("_id", ObjectId::new());
        }

        self.collection(collection).insert_one(&record, None).await.map_err(classify)?;
        Ok(record)
    }

    async fn find_many(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(collection).find(filter, None).await.map_err(classify)?;
        cursor.try_collect::<Vec<_>>().await.map_err(classify)
    }

    async fn count_estimated(&self, collection: &str) -> Result<u64, StoreError> {
        self.collection(collection).estimated_document_count(None).await.map_err(classify)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }, None).await.map_err(classify)?;
        Ok(())
    }
}

/// Sort driver errors into connection trouble, refused writes and the rest
fn classify(e: MongoError) -> StoreError {
    match e.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => StoreError::unavailable(e.to_string()),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DOCUMENT_VALIDATION_FAILURE =>
        {
            StoreError::rejected(write_error.message.clone())
        }
        _ => StoreError::backend(e.to_string()),
    }
}
