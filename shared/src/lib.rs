//! Shared building blocks for the file maintenance tools
//!
//! Holds only the ambient pieces both tools need: tool identity and logging,
//! the file-access error taxonomy, per-file outcome reporting, and the
//! `FileSystem` seam with its tokio-backed implementation. Domain logic lives
//! in the `deduplicator` and `normalizer` crates.

pub mod errors;
pub mod logging;
pub mod services;
pub mod traits;
pub mod types;

pub use errors::*;
pub use services::RealFileSystem;
pub use traits::{FileSystem, MockFileSystem};
pub use types::*;

// Re-exported so the logging macros resolve for every caller
pub use tracing;
