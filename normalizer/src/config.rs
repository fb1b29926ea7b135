//! Command line and environment configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use shared::OutputFormat;

use crate::error::{NormalizerError, NormalizerResult};

/// What a failure on one file does to the rest of the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Abort the whole walk on the first unreadable or unwritable file
    #[default]
    FailFast,
    /// Record the failure, skip undecodable files, and keep walking
    Isolate,
}

/// Lowercase every EVM contract address found under a directory
#[derive(Parser, Debug)]
#[command(name = "normalize-addresses")]
#[command(about = "Rewrites 0x-prefixed 40-digit hex contract addresses in lowercase across a directory tree")]
pub struct Args {
    /// Directory to scan recursively
    #[arg(long, short, env = "NORMALIZE_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Failure handling for individual files
    #[arg(long, value_enum, env = "NORMALIZE_ON_ERROR", default_value_t = FailurePolicy::FailFast)]
    pub on_error: FailurePolicy,

    /// Report which files would change without rewriting them
    #[arg(long, env = "NORMALIZE_DRY_RUN")]
    pub dry_run: bool,

    /// Summary format written to stdout
    #[arg(long, value_enum, env = "NORMALIZE_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "NORMALIZE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Settings for one normalization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub root: PathBuf,
    pub on_error: FailurePolicy,
    pub dry_run: bool,
    pub format: OutputFormat,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            on_error: FailurePolicy::FailFast,
            dry_run: false,
            format: OutputFormat::Text,
        }
    }
}

impl NormalizerConfig {
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, on_error: FailurePolicy) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn validate(&self) -> NormalizerResult<()> {
        if self.root.as_os_str().is_empty() {
            return Err(NormalizerError::config("root directory must not be empty"));
        }
        Ok(())
    }
}

impl From<Args> for NormalizerConfig {
    fn from(args: Args) -> Self {
        Self {
            root: args.root,
            on_error: args.on_error,
            dry_run: args.dry_run,
            format: args.format,
        }
    }
}
