//! Core business logic modules
//!
//! Pure functions over in-memory text with no I/O dependencies.

pub mod uniqueness;

pub use uniqueness::{Deduplicated, UniquenessStats, UniquenessTracker, deduplicate};
