//! SMS Ingest Service
//!
//! A small write-only HTTP service built with Tokio and Axum: it accepts
//! SMS-event notifications as GET requests and persists each valid one as a
//! document in a MongoDB collection.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 SMS INGEST                    │
//!                    │                                               │
//!   GET /?func=add…  │  ┌─────────┐   ┌──────────┐   ┌──────────┐   │
//!   ─────────────────┼─▶│  http   │──▶│  params  │──▶│ storage  │───┼──▶ MongoDB
//!                    │  │ server  │   │ validate │   │  client  │   │
//!                    │  └─────────┘   └──────────┘   └──────────┘   │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                    │  │  │ config │ │observability│ │lifecycle│ │ │
//!                    │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Startup order is config → storage → listener: the MongoDB connection is
//! verified before the service accepts any traffic, and a connect failure
//! terminates the process.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use sms_ingest::config::loader::load_config;
use sms_ingest::lifecycle::{signals, Shutdown};
use sms_ingest::observability::{logging, metrics};
use sms_ingest::storage::MongoStore;
use sms_ingest::{HttpServer, IngestConfig};

#[derive(Parser, Debug)]
#[command(name = "sms-ingest", version, about = "Persist SMS-event notifications to MongoDB")]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let args = Args::parse();

    tracing::info!("sms-ingest v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => IngestConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        database = %config.storage.database,
        collection = %config.storage.collection,
        connect_timeout_secs = config.storage.connect_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    // Storage connects first; the listener only opens once MongoDB is
    // confirmed reachable.
    let store = Arc::new(MongoStore::connect(&config.storage).await?);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::handle_signals(&shutdown).await;
    });

    let server = HttpServer::new(config, store);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
