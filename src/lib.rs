//! SMS Ingest Service Library

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod storage;

pub use config::schema::IngestConfig;
pub use error::IngestError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use storage::{RecordStore, SmsRecord};
