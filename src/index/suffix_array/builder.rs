//! Suffix array builder
//!
//! Builds a suffix array over the whole corpus by sorting every suffix
//! position with a bounded lexicographic comparison. Large texts are sorted
//! in parallel with rayon.
//!
//! The resulting suffix array enables O(m log n) substring search.

use super::reader::SuffixArray;
use super::types::*;
use crate::error::LoadError;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Builder for constructing a suffix array over a corpus
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Build the suffix array for `text`
    ///
    /// This is the main computation. It either succeeds with a complete
    /// index or fails without leaving any partial state behind.
    pub fn build(&self, text: Arc<str>) -> Result<SuffixArray, LoadError> {
        let n = text.len();
        let limit = self.config.max_text_size.min(MAX_TEXT_SIZE);
        if n as u64 > limit {
            return Err(LoadError::CorpusTooLarge { size: n as u64, limit });
        }

        let started = Instant::now();
        let suffixes = if n >= self.config.parallel_threshold {
            build_suffix_array_parallel(text.as_bytes())
        } else {
            build_suffix_array_serial(text.as_bytes())
        };
        let build_ms = started.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(suffixes = suffixes.len(), build_ms, "suffix array built");

        Ok(SuffixArray::from_parts(text, suffixes, build_ms))
    }
}

/// Build suffix array using parallel sort
///
/// This approach:
/// 1. Creates array of all suffix positions [0, 1, 2, ..., n-1]
/// 2. Sorts positions by comparing the suffixes they point to
/// 3. Uses rayon for parallel sorting
///
/// Time: O(n log n) comparisons, each bounded by MAX_COMPARE bytes
/// Space: O(n) for the suffix array
fn build_suffix_array_parallel(text: &[u8]) -> Vec<SuffixEntry> {
    let mut sa: Vec<SuffixEntry> = (0..text.len() as SuffixEntry).collect();
    sa.par_sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    sa
}

fn build_suffix_array_serial(text: &[u8]) -> Vec<SuffixEntry> {
    let mut sa: Vec<SuffixEntry> = (0..text.len() as SuffixEntry).collect();
    sa.sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    sa
}

/// Compare two suffixes lexicographically over their first MAX_COMPARE bytes
///
/// Suffixes equal over that window are ordered by position, so serial and
/// parallel builds produce the same array.
#[inline]
pub(super) fn compare_suffixes(text: &[u8], a: usize, b: usize) -> std::cmp::Ordering {
    let len_a = (text.len() - a).min(MAX_COMPARE);
    let len_b = (text.len() - b).min(MAX_COMPARE);

    text[a..a + len_a].cmp(&text[b..b + len_b]).then(a.cmp(&b))
}
