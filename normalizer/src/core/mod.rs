//! Core business logic modules
//!
//! Pure text transformation with no I/O dependencies.

pub mod address;

pub use address::{AddressPattern, CONTRACT_ADDRESS_PATTERN, Normalized};
