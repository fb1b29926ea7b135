//! Directory walk that lowercases contract addresses file by file
//!
//! Files are processed strictly one after another: read whole, transform,
//! and rewrite only when the content changed.

use std::fmt::Write as _;
use std::path::Path;

use shared::{
    FileAccessResult, FileOutcome, FileSystem, RunReport, ToolId, logging, tool_debug, tool_info, tool_warn,
};

use crate::config::{FailurePolicy, NormalizerConfig};
use crate::core::AddressPattern;
use crate::error::NormalizerResult;

/// Lowercases contract addresses in every file under a root directory
pub struct AddressNormalizer<F: FileSystem> {
    config: NormalizerConfig,
    pattern: AddressPattern,
    file_system: F,
}

impl<F: FileSystem> AddressNormalizer<F> {
    pub fn new(config: NormalizerConfig, file_system: F) -> NormalizerResult<Self> {
        Ok(Self::with_pattern(config, AddressPattern::new()?, file_system))
    }

    pub fn with_pattern(config: NormalizerConfig, pattern: AddressPattern, file_system: F) -> Self {
        Self {
            config,
            pattern,
            file_system,
        }
    }

    /// Walk the root and normalize every file found
    ///
    /// A root that cannot be listed is always an error. Under
    /// `FailurePolicy::FailFast` the first file error ends the run; files
    /// rewritten before it stay rewritten. Under `FailurePolicy::Isolate`
    /// every file gets an outcome in the returned report.
    pub async fn run(&self) -> NormalizerResult<RunReport> {
        self.config.validate()?;
        let root = &self.config.root;

        let files = self.file_system.list_files(root).await?;
        logging::log_progress(
            ToolId::current(),
            "Scanning",
            &format!("{} files under {}", files.len(), root.display()),
        );

        let mut report = RunReport::new(ToolId::Normalizer, root.clone(), self.config.dry_run);

        for path in files {
            let outcome = match self.process_file(&path).await {
                Ok(outcome) => outcome,
                Err(err) => match self.config.on_error {
                    FailurePolicy::FailFast => {
                        logging::log_error(ToolId::current(), &format!("Processing {}", path.display()), &err);
                        return Err(err.into());
                    }
                    FailurePolicy::Isolate if err.is_decode() => {
                        tool_debug!(ToolId::current(), "Skipping non-text file {}", path.display());
                        FileOutcome::Skipped {
                            reason: "not UTF-8 text".to_string(),
                        }
                    }
                    FailurePolicy::Isolate => {
                        tool_warn!(ToolId::current(), "⚠️ {}", err);
                        FileOutcome::Failed {
                            error: err.to_string(),
                        }
                    }
                },
            };
            report.record(path, outcome);
        }

        tool_info!(
            ToolId::current(),
            "Processed {} files: {} modified, {} failed",
            report.files.len(),
            report.modified_count(),
            report.failure_count()
        );
        Ok(report)
    }

    /// Normalize a single file, writing it back only if something changed
    pub async fn process_file(&self, path: &Path) -> FileAccessResult<FileOutcome> {
        let content = self.file_system.read_text(path).await?;
        let normalized = self.pattern.normalize(&content);

        if !normalized.changed() {
            return Ok(FileOutcome::Unchanged);
        }

        tool_debug!(
            ToolId::current(),
            "{}: {} of {} addresses lowercased",
            path.display(),
            normalized.rewritten,
            normalized.matches
        );

        if !self.config.dry_run {
            self.file_system.write_text(path, &normalized.content).await?;
        }
        Ok(FileOutcome::Modified)
    }
}

/// Console summary of a normalization run
pub fn render_text(report: &RunReport) -> String {
    let mut out = String::new();

    let modified: Vec<&Path> = report.modified().collect();
    if modified.is_empty() {
        out.push_str("No files were modified.\n");
    } else {
        if report.dry_run {
            out.push_str("The following files would be modified:\n");
        } else {
            out.push_str("The following files were modified:\n");
        }
        for path in modified {
            let _ = writeln!(out, "{}", path.display());
        }
    }

    let skipped: Vec<_> = report.skipped().collect();
    if !skipped.is_empty() {
        out.push_str("The following files were skipped:\n");
        for file in skipped {
            if let FileOutcome::Skipped { reason } = &file.outcome {
                let _ = writeln!(out, "{} ({})", file.path.display(), reason);
            }
        }
    }

    let failures: Vec<_> = report.failures().collect();
    if !failures.is_empty() {
        out.push_str("The following files could not be processed:\n");
        for file in failures {
            if let FileOutcome::Failed { error } = &file.outcome {
                let _ = writeln!(out, "{}: {}", file.path.display(), error);
            }
        }
    }

    out.push_str("All files have been processed.");
    out
}
