//! Structured error types for the vector loader

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("registry lookup failed: {0}")]
    Registry(#[from] xmss_registry_api::Error),

    #[error("{name}: {field} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        name: String,
        field: &'static str,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;
