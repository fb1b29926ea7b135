//! Shared error types for the file maintenance tools

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to access a file, classified by what went wrong
#[derive(Error, Debug)]
pub enum FileAccessError {
    #[error("Path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Content is not valid UTF-8 text: {}", .path.display())]
    Decode { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileAccessError {
    /// Classify an I/O error raised while reading or listing `path`
    pub fn on_read(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::InvalidData => Self::Decode { path },
            _ => Self::Read { path, source: err },
        }
    }

    /// Classify an I/O error raised while writing `path`
    pub fn on_write(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Write { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::Decode { path }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => path,
        }
    }

    /// True when the file exists but holds something other than UTF-8 text
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

pub type FileAccessResult<T> = Result<T, FileAccessError>;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
