//! Service implementations
//!
//! Real implementations of the shared traits, handling actual I/O.

pub mod file_system;

#[cfg(test)]
mod tests;

pub use file_system::RealFileSystem;
