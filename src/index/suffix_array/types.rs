//! Types for suffix array indexing
//!
//! This module defines the core types used for suffix array-based search,
//! which provides O(m log n) exact substring matching over the corpus.

use serde::{Deserialize, Serialize};

/// Position in the corpus text (corpora up to 4 GiB)
pub type TextPosition = u32;

/// Suffix array entry - position in the corpus text
pub type SuffixEntry = u32;

/// Largest corpus the index can address
pub const MAX_TEXT_SIZE: u64 = TextPosition::MAX as u64;

/// Suffixes are ordered by at most this many leading bytes.
///
/// Patterns up to this length are answered directly by binary search;
/// longer patterns narrow by their prefix and then verify each candidate.
pub const MAX_COMPARE: usize = 256;

/// Configuration for suffix array building
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuffixArrayConfig {
    /// Texts at least this long are sorted with rayon (default: 100KB)
    pub parallel_threshold: usize,
    /// Refuse to index texts larger than this (bytes, default: 4GB - 1)
    pub max_text_size: u64,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 100_000,
            max_text_size: MAX_TEXT_SIZE,
        }
    }
}

/// Statistics about a built suffix array
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SuffixArrayStats {
    /// Size of the indexed text in bytes
    pub text_size: usize,
    /// Number of suffixes (equals text_size)
    pub suffix_count: usize,
    /// Approximate heap footprint of the suffix array itself
    pub memory_bytes: usize,
    /// Build time in milliseconds
    pub build_ms: f64,
}
