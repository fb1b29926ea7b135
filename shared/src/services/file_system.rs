//! Real file system service implementation
//!
//! Reads whole files as UTF-8 text, replaces content through a sibling
//! temporary file and a rename, and walks directory trees.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::errors::{FileAccessError, FileAccessResult};
use crate::traits::FileSystem;
use crate::types::ToolId;
use crate::{tool_debug, tool_warn};

/// Real file system implementation backed by `tokio::fs`
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }

    /// Sibling path used while replacing `path`
    fn staging_path(path: &Path) -> io::Result<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name")
        })?;
        let staged = format!(".{}.{}.tmp", file_name.to_string_lossy(), std::process::id());
        Ok(path.with_file_name(staged))
    }

    async fn write_staged(staging: &Path, target: &Path, content: &str) -> io::Result<()> {
        // The rename would bypass the target's mode bits, so demand write access up front
        match fs::OpenOptions::new().write(true).open(target).await {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }

        let mut file = fs::File::create(staging).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        // Keep the target's permissions on the replacement
        if let Ok(metadata) = fs::metadata(target).await {
            fs::set_permissions(staging, metadata.permissions()).await?;
        }

        fs::rename(staging, target).await
    }
}

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_text(&self, path: &Path) -> FileAccessResult<String> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| FileAccessError::on_read(path, e))?;

        String::from_utf8(bytes).map_err(|_| FileAccessError::Decode {
            path: path.to_path_buf(),
        })
    }

    async fn write_text(&self, path: &Path, content: &str) -> FileAccessResult<()> {
        // Write through links rather than replacing them
        let target = fs::canonicalize(path).await.unwrap_or_else(|_| path.to_path_buf());
        let staging = Self::staging_path(&target).map_err(|e| FileAccessError::on_write(path, e))?;

        if let Err(e) = Self::write_staged(&staging, &target, content).await {
            let _ = fs::remove_file(&staging).await;
            return Err(FileAccessError::on_write(path, e));
        }

        tool_debug!(ToolId::current(), "💾 Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    async fn list_files(&self, root: &Path) -> FileAccessResult<Vec<PathBuf>> {
        let metadata = fs::metadata(root)
            .await
            .map_err(|e| FileAccessError::on_read(root, e))?;
        if metadata.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if dir == root => return Err(FileAccessError::on_read(&dir, e)),
                Err(e) => {
                    // Unreadable subdirectories are passed over, the rest of the tree is still walked
                    tool_warn!(ToolId::current(), "⚠️ Skipping unreadable directory {}: {}", dir.display(), e);
                    continue;
                }
            };

            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(e) => {
                        tool_warn!(ToolId::current(), "⚠️ Stopped listing {}: {}", dir.display(), e);
                        break;
                    }
                };

                let path = entry.path();
                let file_type = match entry.file_type().await {
                    Ok(file_type) => file_type,
                    Err(e) => {
                        tool_warn!(ToolId::current(), "⚠️ Cannot stat {}: {}", path.display(), e);
                        continue;
                    }
                };

                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() {
                    files.push(path);
                } else if file_type.is_symlink() {
                    // Linked files are processed, linked directories are not descended
                    match fs::metadata(&path).await {
                        Ok(target) if target.is_file() => files.push(path),
                        Ok(_) => {
                            tool_debug!(ToolId::current(), "Not following directory link {}", path.display());
                        }
                        Err(_) => {
                            tool_debug!(ToolId::current(), "Ignoring dangling link {}", path.display());
                        }
                    }
                }
            }
        }

        files.sort();
        tool_debug!(ToolId::current(), "📁 Found {} files under {}", files.len(), root.display());
        Ok(files)
    }
}
