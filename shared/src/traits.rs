//! Trait definitions with mockall annotations for testing
//!
//! The `FileSystem` seam keeps both tools free of direct I/O so their
//! processing logic can be exercised against `MockFileSystem`.

use std::path::{Path, PathBuf};

use crate::errors::FileAccessResult;

/// File system abstraction for dependency injection
#[mockall::automock]
#[async_trait::async_trait]
pub trait FileSystem: Send + Sync {
    /// Read an entire file as UTF-8 text
    ///
    /// # Returns
    /// The file content, or `FileAccessError::Decode` when the bytes are not UTF-8
    async fn read_text(&self, path: &Path) -> FileAccessResult<String>;

    /// Replace the content of a file
    ///
    /// The original content stays intact if the write fails part way.
    async fn write_text(&self, path: &Path, content: &str) -> FileAccessResult<()>;

    /// List every regular file under `root`, recursively, in sorted order
    ///
    /// # Parameters
    /// - `root`: Directory to walk; a plain file yields just itself
    async fn list_files(&self, root: &Path) -> FileAccessResult<Vec<PathBuf>>;
}
