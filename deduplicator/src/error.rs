//! Deduplicator-specific error types

use shared::{FileAccessError, SharedError};
use thiserror::Error;

/// Result type for deduplicator operations
pub type DedupResult<T> = Result<T, DedupError>;

#[derive(Error, Debug)]
pub enum DedupError {
    #[error("File access failed: {0}")]
    FileAccess(#[from] FileAccessError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl DedupError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}
