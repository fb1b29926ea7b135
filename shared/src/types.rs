//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::errors::SharedResult;

/// Global tool ID singleton - set once at startup
static TOOL_ID: OnceLock<ToolId> = OnceLock::new();

/// Identity reported when no binary has claimed the process (library use, tests)
static EMBEDDED: ToolId = ToolId::Embedded;

/// Identifier for the tool running in this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    /// Line deduplicator binary
    Deduplicator,
    /// Contract address normalizer binary
    Normalizer,
    /// Library code running without a binary entry point
    Embedded,
}

impl ToolId {
    /// Initialize the global tool ID for the deduplicator
    pub fn init_deduplicator() -> &'static ToolId {
        TOOL_ID.get_or_init(|| ToolId::Deduplicator)
    }

    /// Initialize the global tool ID for the address normalizer
    pub fn init_normalizer() -> &'static ToolId {
        TOOL_ID.get_or_init(|| ToolId::Normalizer)
    }

    /// Get the global tool ID, `Embedded` until a binary initializes it
    pub fn current() -> &'static ToolId {
        TOOL_ID.get().unwrap_or(&EMBEDDED)
    }

    /// Crate name used as the tracing target for this tool
    pub fn crate_name(&self) -> &'static str {
        match self {
            ToolId::Deduplicator => "deduplicator",
            ToolId::Normalizer => "normalizer",
            ToolId::Embedded => "shared",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolId::Deduplicator => write!(f, "dedup"),
            ToolId::Normalizer => write!(f, "normalizer"),
            ToolId::Embedded => write!(f, "embedded"),
        }
    }
}

/// How a run summary is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console messages
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// What happened to a single file during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Content changed (and was rewritten unless the run is a dry run)
    Modified,
    /// Content already in the desired form; file left untouched
    Unchanged,
    /// File deliberately not processed
    Skipped { reason: String },
    /// Processing failed; the file was not rewritten
    Failed { error: String },
}

impl FileOutcome {
    pub fn is_modified(&self) -> bool {
        matches!(self, FileOutcome::Modified)
    }
}

/// Outcome for one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Aggregated per-file outcomes of one tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub tool: ToolId,
    pub root: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(tool: ToolId, root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            tool,
            root: root.into(),
            dry_run,
            files: Vec::new(),
        }
    }

    /// Record the outcome for a path, preserving processing order
    pub fn record(&mut self, path: impl Into<PathBuf>, outcome: FileOutcome) {
        self.files.push(FileReport {
            path: path.into(),
            outcome,
        });
    }

    pub fn modified(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|f| f.outcome.is_modified())
            .map(|f| f.path.as_path())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Skipped { .. }))
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Failed { .. }))
    }

    pub fn modified_count(&self) -> usize {
        self.modified().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn outcome_of(&self, path: &Path) -> Option<&FileOutcome> {
        self.files.iter().find(|f| f.path == path).map(|f| &f.outcome)
    }

    pub fn to_json(&self) -> SharedResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_id_display() {
        assert_eq!(ToolId::Deduplicator.to_string(), "dedup");
        assert_eq!(ToolId::Normalizer.to_string(), "normalizer");
        assert_eq!(ToolId::Embedded.to_string(), "embedded");
    }

    #[test]
    fn test_report_partitions_outcomes() {
        let mut report = RunReport::new(ToolId::Normalizer, "/tmp/root", false);
        report.record("/tmp/root/a.ts", FileOutcome::Modified);
        report.record("/tmp/root/b.ts", FileOutcome::Unchanged);
        report.record(
            "/tmp/root/c.png",
            FileOutcome::Skipped {
                reason: "not UTF-8 text".to_string(),
            },
        );
        report.record(
            "/tmp/root/d.ts",
            FileOutcome::Failed {
                error: "Permission denied".to_string(),
            },
        );

        let modified: Vec<_> = report.modified().collect();
        assert_eq!(modified, vec![Path::new("/tmp/root/a.ts")]);
        assert_eq!(report.skipped().count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            report.outcome_of(Path::new("/tmp/root/b.ts")),
            Some(&FileOutcome::Unchanged)
        );
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = RunReport::new(ToolId::Normalizer, "root", true);
        report.record("root/a.ts", FileOutcome::Modified);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["tool"], "normalizer");
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["files"][0]["path"], "root/a.ts");
        assert_eq!(json["files"][0]["status"], "modified");
    }
}
