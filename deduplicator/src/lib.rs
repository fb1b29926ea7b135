//! Stable line deduplication for text files
//!
//! Rewrites a file so that it keeps only the first occurrence of every
//! distinct line, in the order those first occurrences appeared.

pub mod config;
pub mod core;
pub mod deduplicator;
pub mod error;

// Re-export commonly used types
pub use config::{Args, DedupConfig};
pub use crate::core::{Deduplicated, UniquenessStats, UniquenessTracker, deduplicate};
pub use deduplicator::{DedupReport, Deduplicator};
pub use error::{DedupError, DedupResult};
