//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the ingest
//! service. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for the SMS ingest service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct IngestConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// MongoDB storage settings.
    pub storage: StorageConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8081").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8081".to_string(),
        }
    }
}

/// MongoDB storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Connection URI (e.g., "mongodb://localhost:27017").
    pub uri: String,

    /// Database name.
    pub database: String,

    /// Collection name.
    pub collection: String,

    /// Initial connection timeout in seconds. Connect failure within this
    /// window is fatal at startup.
    pub connect_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "sms".to_string(),
            collection: "sms-dumped".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Address the metrics exporter binds to.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9091".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = IngestConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8081");
        assert_eq!(config.storage.uri, "mongodb://localhost:27017");
        assert_eq!(config.storage.database, "sms");
        assert_eq!(config.storage.collection, "sms-dumped");
        assert_eq!(config.storage.connect_timeout_secs, 10);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: IngestConfig = toml::from_str(
            r#"
            [storage]
            database = "sms-staging"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.database, "sms-staging");
        assert_eq!(config.storage.collection, "sms-dumped");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8081");
    }
}
