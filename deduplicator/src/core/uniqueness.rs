//! Uniqueness tracking for lines of text
//!
//! Lines are compared by exact text, terminator included, so `"a\n"` and a
//! final unterminated `"a"` are distinct lines. The tracker borrows from the
//! content it scans; nothing is copied until the result is assembled.

use std::collections::HashSet;

use serde::Serialize;

/// Statistics about a deduplication pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UniquenessStats {
    pub total_lines: u64,
    pub unique_lines: u64,
    pub duplicates_removed: u64,
}

/// Keeps the first occurrence of every distinct line, in order
#[derive(Debug, Default)]
pub struct UniquenessTracker<'a> {
    /// Lines seen so far
    seen: HashSet<&'a str>,

    /// First occurrences, in input order
    unique_lines: Vec<&'a str>,

    stats: UniquenessStats,
}

impl<'a> UniquenessTracker<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a line; returns true when it is the first occurrence
    pub fn observe(&mut self, line: &'a str) -> bool {
        self.stats.total_lines += 1;

        if self.seen.insert(line) {
            self.unique_lines.push(line);
            self.stats.unique_lines += 1;
            true
        } else {
            self.stats.duplicates_removed += 1;
            false
        }
    }

    pub fn stats(&self) -> &UniquenessStats {
        &self.stats
    }

    /// Join the first occurrences back into file content
    pub fn into_content(self) -> String {
        self.unique_lines.concat()
    }
}

/// Result of deduplicating a whole text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduplicated {
    pub content: String,
    pub stats: UniquenessStats,
}

impl Deduplicated {
    /// True when at least one line was dropped
    pub fn changed(&self) -> bool {
        self.stats.duplicates_removed > 0
    }
}

/// Split text into lines that keep their `\n` (and any preceding `\r`)
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}

/// Stable deduplication of the lines of `content`
pub fn deduplicate(content: &str) -> Deduplicated {
    let mut tracker = UniquenessTracker::new();
    for line in split_lines(content) {
        tracker.observe(line);
    }

    let stats = *tracker.stats();
    Deduplicated {
        content: tracker.into_content(),
        stats,
    }
}
