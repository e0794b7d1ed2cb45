//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ingest_requests_total` (counter): requests by method, status
//! - `ingest_request_duration_seconds` (histogram): latency by method
//!
//! # Design Decisions
//! - Recording is unconditional; without an installed exporter the macros
//!   are no-ops, so handlers never check config
//! - Exporter failure is logged, not fatal (the service can run blind)

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("ingest_requests_total", &labels).increment(1);
    metrics::histogram!(
        "ingest_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
