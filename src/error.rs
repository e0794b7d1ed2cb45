//! Request-level error taxonomy.
//!
//! Display strings double as the exact HTTP response bodies, so changing
//! them is a wire-visible change.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::storage::StorageError;

/// Errors surfaced by the ingest endpoint.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The endpoint only serves GET.
    #[error("Only GET requests are allowed")]
    MethodNotAllowed,

    /// The `func` query parameter was not the literal "add".
    #[error("Invalid 'func' parameter")]
    InvalidFunc,

    /// One of `source`, `receiver`, `info` failed its format check.
    #[error("Invalid parameter format")]
    InvalidParams,

    /// The insert failed. The body stays generic; the driver error is
    /// logged at the call site, not leaked to the caller.
    #[error("Error inserting data into MongoDB")]
    Storage(#[from] StorageError),
}

impl IngestError {
    pub fn status(&self) -> StatusCode {
        match self {
            IngestError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            IngestError::InvalidFunc | IngestError::InvalidParams => StatusCode::BAD_REQUEST,
            IngestError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            IngestError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(IngestError::InvalidFunc.status(), StatusCode::BAD_REQUEST);
        assert_eq!(IngestError::InvalidParams.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bodies_are_stable() {
        assert_eq!(
            IngestError::MethodNotAllowed.to_string(),
            "Only GET requests are allowed"
        );
        assert_eq!(
            IngestError::InvalidFunc.to_string(),
            "Invalid 'func' parameter"
        );
        assert_eq!(
            IngestError::InvalidParams.to_string(),
            "Invalid parameter format"
        );
    }
}
