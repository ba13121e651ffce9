//! Errors raised by session storage and the authenticated transport.

use thiserror::Error;

/// Errors that can occur when reading or writing persisted session state
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on storage file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file {path} is not a JSON object: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when talking to the authenticated API
#[derive(Error, Debug)]
pub enum AuthError {
    /// The API rejected the bearer token
    #[error("Request was not authorized")]
    Unauthorized,

    /// Exchanging the refresh token for a new access token failed
    #[error("Failed to refresh access token: {0}")]
    RefreshFailed(String),

    /// Any non-authorization failure of the underlying request
    #[error("Transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result alias; storage errors unless stated otherwise
pub type Result<T, E = StorageError> = std::result::Result<T, E>;
