//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, request IDs)
//!     → handlers.rs (method check, dispatch)
//!     → params.rs (query parsing + regex validation)
//!     → [storage layer inserts the record]
//!     → response with exact status/body per contract
//! ```

pub mod handlers;
pub mod params;
pub mod server;

pub use params::IngestParams;
pub use server::{AppState, HttpServer};
