//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, addresses parse)
//! - Check the storage URI uses a mongodb scheme
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: IngestConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::IngestConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("storage.uri must start with mongodb:// or mongodb+srv://, got {0:?}")]
    InvalidStorageUri(String),

    #[error("storage.database must not be empty")]
    EmptyDatabase,

    #[error("storage.collection must not be empty")]
    EmptyCollection,

    #[error("storage.connect_timeout_secs must be greater than zero")]
    ZeroConnectTimeout,

    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a deserialized configuration, collecting every failure.
pub fn validate_config(config: &IngestConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let uri = &config.storage.uri;
    if !uri.starts_with("mongodb://") && !uri.starts_with("mongodb+srv://") {
        errors.push(ValidationError::InvalidStorageUri(uri.clone()));
    }

    if config.storage.database.is_empty() {
        errors.push(ValidationError::EmptyDatabase);
    }
    if config.storage.collection.is_empty() {
        errors.push(ValidationError::EmptyCollection);
    }
    if config.storage.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&IngestConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = IngestConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.storage.uri = "postgres://localhost".into();
        config.storage.database = String::new();
        config.storage.connect_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyDatabase));
        assert!(errors.contains(&ValidationError::ZeroConnectTimeout));
    }

    #[test]
    fn srv_uri_is_accepted() {
        let mut config = IngestConfig::default();
        config.storage.uri = "mongodb+srv://cluster0.example.net".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn metrics_address_only_checked_when_enabled() {
        let mut config = IngestConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidMetricsAddress("bogus".into())]
        );
    }
}
