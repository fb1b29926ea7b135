//! Contract address detection and lowercasing
//!
//! Matching is purely textual: no checksum validation and no word
//! boundaries, so a qualifying run embedded in longer text still matches.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::NormalizerResult;

/// Literal `0x` followed by exactly 40 hex digits of either case
pub const CONTRACT_ADDRESS_PATTERN: &str = r"0x[a-fA-F0-9]{40}";

/// Text after normalization, with match counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<'a> {
    pub content: Cow<'a, str>,
    /// Addresses found
    pub matches: usize,
    /// Addresses that contained uppercase digits
    pub rewritten: usize,
}

impl Normalized<'_> {
    /// True when the output differs from the input
    pub fn changed(&self) -> bool {
        self.rewritten > 0
    }
}

/// Compiled contract address matcher
#[derive(Debug, Clone)]
pub struct AddressPattern {
    regex: Regex,
}

impl AddressPattern {
    pub fn new() -> NormalizerResult<Self> {
        Self::from_pattern(CONTRACT_ADDRESS_PATTERN)
    }

    pub fn from_pattern(pattern: &str) -> NormalizerResult<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Replace every match with its lowercase form
    pub fn normalize<'a>(&self, content: &'a str) -> Normalized<'a> {
        let mut matches = 0;
        let mut rewritten = 0;

        let replaced = self.regex.replace_all(content, |caps: &Captures| {
            let address = &caps[0];
            let lowered = address.to_ascii_lowercase();
            matches += 1;
            if lowered != address {
                rewritten += 1;
            }
            lowered
        });

        // Matches that were already lowercase still produce an owned copy
        let content = if rewritten == 0 {
            Cow::Borrowed(content)
        } else {
            replaced
        };

        Normalized {
            content,
            matches,
            rewritten,
        }
    }
}
