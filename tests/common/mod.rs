//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::net::TcpListener;

use sms_ingest::storage::StorageError;
use sms_ingest::{HttpServer, IngestConfig, RecordStore, Shutdown, SmsRecord};

/// In-memory stand-in for the MongoDB store.
///
/// Records inserts for assertion and can be switched into a failing mode to
/// simulate an unreachable backend.
pub struct MemoryStore {
    records: Mutex<Vec<SmsRecord>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        })
    }

    /// Make every subsequent insert fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of everything persisted so far.
    pub fn records(&self) -> Vec<SmsRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, record: SmsRecord) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Insert(mongodb::error::Error::custom(
                "injected insert failure",
            )));
        }
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

/// Start the ingest server on an ephemeral port backed by the given store.
///
/// Returns the bound address and the shutdown handle keeping the server
/// alive until the test drops or triggers it.
pub async fn spawn_server(store: Arc<dyn RecordStore>) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(IngestConfig::default(), store);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}
