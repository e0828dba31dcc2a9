//! Suffix array search
//!
//! Provides O(m log n) exact substring lookup over an in-memory suffix array.

use super::types::*;
use std::sync::Arc;

/// A built suffix array together with the text it indexes
///
/// The text is shared with the corpus store, so holding both costs one copy
/// of the corpus plus four bytes per suffix.
pub struct SuffixArray {
    /// Indexed text
    text: Arc<str>,
    /// Sorted suffix positions
    suffixes: Vec<SuffixEntry>,
    /// Time spent sorting, for stats
    build_ms: f64,
}

impl SuffixArray {
    pub(super) fn from_parts(text: Arc<str>, suffixes: Vec<SuffixEntry>, build_ms: f64) -> Self {
        Self {
            text,
            suffixes,
            build_ms,
        }
    }

    /// Get text starting at a position
    #[inline]
    fn text_at(&self, pos: SuffixEntry) -> &[u8] {
        &self.text.as_bytes()[pos as usize..]
    }

    /// Search for a pattern in the suffix array
    ///
    /// Returns the range [lo, hi) of indices in the suffix array
    /// where all suffixes start with the pattern (or with its first
    /// MAX_COMPARE bytes, for longer patterns).
    fn search(&self, pattern: &[u8]) -> (usize, usize) {
        if pattern.is_empty() || self.suffixes.is_empty() {
            return (0, 0);
        }

        let pattern = &pattern[..pattern.len().min(MAX_COMPARE)];
        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        (lo, hi)
    }

    /// Find first index where suffix starts with pattern (or would if inserted)
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        let mut lo = 0;
        let mut hi = self.suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = self.text_at(self.suffixes[mid]);

            // Compare the suffix with the pattern (only up to pattern length)
            let cmp_len = pattern.len().min(suffix.len());
            if &suffix[..cmp_len] < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Find first index at or after `start` where suffix does NOT start with pattern
    fn upper_bound(&self, pattern: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.text_at(self.suffixes[mid]).starts_with(pattern) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Find the start offsets of every occurrence of `pattern`
    ///
    /// Matching is exact and byte-for-byte; callers normalize case first.
    /// `limit = None` returns all occurrences, `Some(n)` the first `n` in
    /// text order. Offsets are sorted ascending. An absent or empty pattern
    /// yields an empty vector.
    pub fn lookup(&self, pattern: &[u8], limit: Option<usize>) -> Vec<usize> {
        let (lo, hi) = self.search(pattern);
        if lo == hi {
            return Vec::new();
        }

        let candidates = self.suffixes[lo..hi].iter().map(|&pos| pos as usize);
        let mut offsets: Vec<usize> = if pattern.len() > MAX_COMPARE {
            candidates
                .filter(|&pos| self.text.as_bytes()[pos..].starts_with(pattern))
                .collect()
        } else {
            candidates.collect()
        };

        offsets.sort_unstable();
        if let Some(limit) = limit {
            offsets.truncate(limit);
        }
        offsets
    }

    /// Get the number of occurrences of a pattern
    pub fn count(&self, pattern: &[u8]) -> usize {
        if pattern.len() > MAX_COMPARE {
            return self.lookup(pattern, None).len();
        }
        let (lo, hi) = self.search(pattern);
        hi - lo
    }

    /// Get statistics about this suffix array
    pub fn stats(&self) -> SuffixArrayStats {
        SuffixArrayStats {
            text_size: self.text.len(),
            suffix_count: self.suffixes.len(),
            memory_bytes: self.suffixes.capacity() * std::mem::size_of::<SuffixEntry>(),
            build_ms: self.build_ms,
        }
    }
}

impl std::fmt::Debug for SuffixArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixArray")
            .field("text_size", &self.text.len())
            .field("suffix_count", &self.suffixes.len())
            .finish()
    }
}
