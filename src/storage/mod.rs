//! Storage subsystem.
//!
//! # Data Flow
//! ```text
//! validated request parameters
//!     → record.rs (SmsRecord, the persisted document shape)
//!     → RecordStore::insert
//!     → client.rs (MongoStore, one long-lived connection)
//! ```
//!
//! # Design Decisions
//! - The connection is established once at startup; connect failure is fatal
//! - Inserts are not retried; the handler surfaces failure as a 500
//! - Handlers depend on the `RecordStore` trait so tests can swap in an
//!   in-memory store

pub mod client;
pub mod record;

use async_trait::async_trait;

pub use client::{MongoStore, StorageError};
pub use record::SmsRecord;

/// Write-only store for SMS records.
///
/// The system never updates, deletes, or queries; insert is the entire
/// surface.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, record: SmsRecord) -> Result<(), StorageError>;
}
