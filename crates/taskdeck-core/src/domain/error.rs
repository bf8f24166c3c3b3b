//! Domain-level errors
//!
//! Three families, matching where a failure originates:
//! caller input, durable local storage, and the remote data source.

use thiserror::Error;

/// Caller-supplied input failed a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("unknown task status: {0:?}")]
    UnknownStatus(String),
}

/// Durable key-value storage could not be read or written.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The remote data source rejected or failed a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("remote returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("failed to decode row: {0}")]
    Decode(String),
    #[error("insert returned no row")]
    EmptyResponse,
}

impl From<serde_json::Error> for RemoteError {
    fn from(e: serde_json::Error) -> Self {
        RemoteError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        RemoteError::Transport(e.to_string())
    }
}

/// Result type for remote data source calls
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Configuration could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("remote url must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),
}
