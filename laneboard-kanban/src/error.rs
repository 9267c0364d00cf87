//! Error types for the board engine
//!
//! Board operations themselves never fail: unknown ids are no-ops and indices
//! are clamped. Only the storage backend can produce an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur while persisting the board
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Storage key cannot be mapped to a blob location
    #[error("invalid storage key: {key:?}")]
    InvalidKey { key: String },

    /// Storage root exists but is not a directory
    #[error("storage root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Lock is held by another process
    #[error("lock busy - another write in progress")]
    LockBusy,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create an invalid key error
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockBusy)
    }
}
