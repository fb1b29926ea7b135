//! Deduplication run over a single file
//!
//! Reads the configured file through the injected `FileSystem`, drops every
//! repeated line, and writes the result back to the same path.

use std::path::PathBuf;

use serde::Serialize;
use shared::{FileOutcome, FileSystem, ToolId, logging, tool_debug, tool_info};

use crate::config::DedupConfig;
use crate::core::{UniquenessStats, deduplicate};
use crate::error::DedupResult;

/// Summary of one deduplication run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DedupReport {
    pub path: PathBuf,
    pub dry_run: bool,
    #[serde(flatten)]
    pub outcome: FileOutcome,
    pub stats: UniquenessStats,
}

impl DedupReport {
    /// Console message for the run
    pub fn to_text(&self) -> String {
        let path = self.path.display();
        match (&self.outcome, self.dry_run) {
            (FileOutcome::Modified, false) => {
                format!("Duplicates removed and file '{path}' updated.")
            }
            (FileOutcome::Modified, true) => format!(
                "Would remove {} duplicate line(s) from '{path}' (dry run, file not written).",
                self.stats.duplicates_removed
            ),
            _ => format!("No duplicate lines found in '{path}'; file left unchanged."),
        }
    }

    pub fn to_json(&self) -> DedupResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| shared::SharedError::from(e).into())
    }
}

/// Stable line deduplicator for one file
pub struct Deduplicator<F: FileSystem> {
    config: DedupConfig,
    file_system: F,
}

impl<F: FileSystem> Deduplicator<F> {
    pub fn new(config: DedupConfig, file_system: F) -> Self {
        Self { config, file_system }
    }

    /// Deduplicate the configured file in place
    ///
    /// The file is rewritten only when at least one line was dropped. Read
    /// and write failures are returned as-is; nothing is retried.
    pub async fn run(&self) -> DedupResult<DedupReport> {
        self.config.validate()?;
        let path = &self.config.file;

        let content = self.file_system.read_text(path).await?;
        let result = deduplicate(&content);

        tool_debug!(
            ToolId::current(),
            "Scanned {} lines in {}: {} unique, {} duplicates",
            result.stats.total_lines,
            path.display(),
            result.stats.unique_lines,
            result.stats.duplicates_removed
        );

        let outcome = if result.changed() {
            if !self.config.dry_run {
                self.file_system.write_text(path, &result.content).await?;
            }
            FileOutcome::Modified
        } else {
            FileOutcome::Unchanged
        };

        match (&outcome, self.config.dry_run) {
            (FileOutcome::Modified, false) => logging::log_success(
                ToolId::current(),
                &format!(
                    "Removed {} duplicate lines from {}",
                    result.stats.duplicates_removed,
                    path.display()
                ),
            ),
            (FileOutcome::Modified, true) => {
                tool_info!(
                    ToolId::current(),
                    "📋 Dry run: {} duplicate lines would be removed from {}",
                    result.stats.duplicates_removed,
                    path.display()
                );
            }
            _ => {
                tool_info!(ToolId::current(), "📋 No duplicates in {}", path.display());
            }
        }

        Ok(DedupReport {
            path: path.clone(),
            dry_run: self.config.dry_run,
            outcome,
            stats: result.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DedupError;
    use assert_matches::assert_matches;
    use shared::{FileAccessError, MockFileSystem};
    use std::io;
    use std::path::Path;

    #[tokio::test]
    async fn test_rewrites_only_when_duplicates_exist() {
        let mut file_system = MockFileSystem::new();
        file_system
            .expect_read_text()
            .withf(|p| p == Path::new("tokens.txt"))
            .times(1)
            .returning(|_| Ok("a\nb\na\nc\nb\n".to_string()));
        file_system
            .expect_write_text()
            .withf(|p, content| p == Path::new("tokens.txt") && content == "a\nb\nc\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let report = Deduplicator::new(DedupConfig::default(), file_system)
            .run()
            .await
            .unwrap();

        assert_eq!(report.outcome, FileOutcome::Modified);
        assert_eq!(report.stats.duplicates_removed, 2);
        assert_eq!(report.to_text(), "Duplicates removed and file 'tokens.txt' updated.");
    }

    #[tokio::test]
    async fn test_unique_file_is_not_written() {
        let mut file_system = MockFileSystem::new();
        file_system
            .expect_read_text()
            .returning(|_| Ok("a\nb\n".to_string()));
        file_system.expect_write_text().times(0);

        let report = Deduplicator::new(DedupConfig::default(), file_system)
            .run()
            .await
            .unwrap();

        assert_eq!(report.outcome, FileOutcome::Unchanged);
    }

    #[tokio::test]
    async fn test_dry_run_never_writes() {
        let mut file_system = MockFileSystem::new();
        file_system
            .expect_read_text()
            .returning(|_| Ok("a\na\na\n".to_string()));
        file_system.expect_write_text().times(0);

        let config = DedupConfig::default().with_dry_run(true);
        let report = Deduplicator::new(config, file_system).run().await.unwrap();

        assert_eq!(report.outcome, FileOutcome::Modified);
        assert!(report.dry_run);
        assert!(report.to_text().contains("Would remove 2 duplicate line(s)"));
    }

    #[tokio::test]
    async fn test_read_failure_propagates() {
        let mut file_system = MockFileSystem::new();
        file_system.expect_read_text().returning(|p| {
            Err(FileAccessError::on_read(p, io::Error::from(io::ErrorKind::NotFound)))
        });
        file_system.expect_write_text().times(0);

        let err = Deduplicator::new(DedupConfig::for_file("missing.txt"), file_system)
            .run()
            .await
            .unwrap_err();

        assert_matches!(err, DedupError::FileAccess(FileAccessError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let mut file_system = MockFileSystem::new();
        file_system
            .expect_read_text()
            .returning(|_| Ok("a\na\n".to_string()));
        file_system.expect_write_text().returning(|p, _| {
            Err(FileAccessError::on_write(p, io::Error::from(io::ErrorKind::PermissionDenied)))
        });

        let err = Deduplicator::new(DedupConfig::default(), file_system)
            .run()
            .await
            .unwrap_err();

        assert_matches!(err, DedupError::FileAccess(FileAccessError::PermissionDenied { .. }));
    }

    #[test]
    fn test_json_report_shape() {
        let report = DedupReport {
            path: PathBuf::from("tokens.txt"),
            dry_run: false,
            outcome: FileOutcome::Modified,
            stats: UniquenessStats {
                total_lines: 5,
                unique_lines: 3,
                duplicates_removed: 2,
            },
        };

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["path"], "tokens.txt");
        assert_eq!(json["status"], "modified");
        assert_eq!(json["stats"]["duplicates_removed"], 2);
    }
}
