//! The ingest endpoint handler.

use std::time::Instant;

use axum::extract::{RawQuery, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::IngestError;
use crate::http::params::IngestParams;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Confirmation body sent on a successful insert.
const INSERT_OK: &str = "Data inserted into MongoDB";

/// Handle one ingest request: method check, parameter validation, insert.
///
/// Registered with `any()` so the 405 body is ours rather than the
/// framework default.
pub async fn ingest_handler(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Response {
    let start = Instant::now();
    let method_str = method.to_string();

    match ingest(&state, &method, query.as_deref().unwrap_or("")).await {
        Ok(body) => {
            metrics::record_request(&method_str, StatusCode::OK.as_u16(), start);
            (StatusCode::OK, body).into_response()
        }
        Err(err) => {
            if let IngestError::Storage(ref cause) = err {
                tracing::error!(error = %cause, "Error inserting data into MongoDB");
            }
            metrics::record_request(&method_str, err.status().as_u16(), start);
            err.into_response()
        }
    }
}

async fn ingest(
    state: &AppState,
    method: &Method,
    query: &str,
) -> Result<&'static str, IngestError> {
    if *method != Method::GET {
        return Err(IngestError::MethodNotAllowed);
    }

    let params = IngestParams::from_query(query);
    params.validate()?;

    tracing::debug!(
        source = %params.source,
        receiver = %params.receiver,
        "Storing SMS record"
    );

    state.store.insert(params.into_record()).await?;
    Ok(INSERT_OK)
}
