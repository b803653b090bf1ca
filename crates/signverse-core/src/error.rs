//! Error types for signverse-core.
//!
//! Backend failures fall into three buckets: the request never completed
//! (network), the server answered with a non-success status, or the body
//! could not be decoded. Storage errors cover the settings key/value store.

use thiserror::Error;

/// Errors that can occur while talking to the translation backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Backend URL could not be parsed or uses an unsupported scheme
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
    /// Request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Network(String),
    /// Backend answered with a non-2xx status
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// No backend client is available (construction failed at startup)
    #[error("Translation backend unavailable")]
    Unavailable,
}

/// Errors that can occur in the settings key/value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage API missing (no window, private mode, no data dir)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// Read or write failed
    #[error("I/O error: {0}")]
    Io(String),
    /// Record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}
