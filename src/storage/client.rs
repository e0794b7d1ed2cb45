//! MongoDB storage client.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::StorageConfig;
use crate::storage::record::SmsRecord;
use crate::storage::RecordStore;

/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("insert failed: {0}")]
    Insert(#[source] mongodb::error::Error),
}

/// Long-lived MongoDB connection writing to one fixed collection.
///
/// The driver's internal pooling makes `Client` (and by extension this
/// store) safe to share across concurrent request tasks; no locking here.
pub struct MongoStore {
    collection: Collection<SmsRecord>,
}

impl MongoStore {
    /// Connect to MongoDB and verify reachability.
    ///
    /// The driver connects lazily, so a `ping` is issued here to force the
    /// handshake. Any failure within the configured timeout is returned to
    /// the caller, which treats it as fatal at startup.
    pub async fn connect(config: &StorageConfig) -> Result<Self, StorageError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(StorageError::Connect)?;

        let timeout = Duration::from_secs(config.connect_timeout_secs);
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options).map_err(StorageError::Connect)?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StorageError::Connect)?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
        })
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn insert(&self, record: SmsRecord) -> Result<(), StorageError> {
        self.collection
            .insert_one(record)
            .await
            .map_err(StorageError::Insert)?;
        Ok(())
    }
}
