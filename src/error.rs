//! Error types for configuration and storage

use thiserror::Error;

/// Errors that can occur while loading application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading file
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// YAML deserialization error
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Environment variable present but unparseable
    #[error("Invalid value '{value}' for {key}")]
    InvalidEnv { key: String, value: String },
}

/// Errors that can occur while opening a file-backed store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Corrupt store '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
