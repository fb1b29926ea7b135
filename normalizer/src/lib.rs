//! Contract address normalization over a directory tree
//!
//! Every `0x`-prefixed run of 40 hex digits found in any file under the
//! configured root is rewritten in lowercase. Files whose content does not
//! change are never written.

pub mod config;
pub mod core;
pub mod error;
pub mod normalizer;

// Re-export commonly used types
pub use config::{Args, FailurePolicy, NormalizerConfig};
pub use crate::core::{AddressPattern, CONTRACT_ADDRESS_PATTERN, Normalized};
pub use error::{NormalizerError, NormalizerResult};
pub use normalizer::{AddressNormalizer, render_text};
