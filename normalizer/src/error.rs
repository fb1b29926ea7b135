//! Normalizer-specific error types

use shared::{FileAccessError, SharedError};
use thiserror::Error;

/// Result type for normalizer operations
pub type NormalizerResult<T> = Result<T, NormalizerError>;

#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("File access failed: {0}")]
    FileAccess(#[from] FileAccessError),

    #[error("Invalid address pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("{count} file(s) could not be processed")]
    FilesFailed { count: usize },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl NormalizerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}
