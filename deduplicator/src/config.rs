//! Command line and environment configuration

use std::path::PathBuf;

use clap::Parser;
use shared::OutputFormat;

use crate::error::{DedupError, DedupResult};

/// File deduplicated when nothing else is configured
pub const DEFAULT_FILE: &str = "tokens.txt";

/// Remove duplicate lines from a text file, keeping first occurrences in order
#[derive(Parser, Debug)]
#[command(name = "dedup-lines")]
#[command(about = "Removes duplicate lines from a text file in place, preserving first-seen order")]
pub struct Args {
    /// File to deduplicate
    #[arg(long, short, env = "DEDUP_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Report what would change without rewriting the file
    #[arg(long, env = "DEDUP_DRY_RUN")]
    pub dry_run: bool,

    /// Summary format written to stdout
    #[arg(long, value_enum, env = "DEDUP_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DEDUP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Settings for one deduplication run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupConfig {
    pub file: PathBuf,
    pub dry_run: bool,
    pub format: OutputFormat,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            dry_run: false,
            format: OutputFormat::Text,
        }
    }
}

impl DedupConfig {
    pub fn for_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn validate(&self) -> DedupResult<()> {
        if self.file.as_os_str().is_empty() {
            return Err(DedupError::config("file path must not be empty"));
        }
        Ok(())
    }
}

impl From<Args> for DedupConfig {
    fn from(args: Args) -> Self {
        Self {
            file: args.file,
            dry_run: args.dry_run,
            format: args.format,
        }
    }
}
