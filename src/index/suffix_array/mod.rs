//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using a suffix
//! array built once over the whole corpus and held in memory.
//!
//! ## Architecture
//!
//! - `builder`: Sorts the suffixes of the corpus
//! - `reader`: Binary-search lookups over the sorted suffixes
//! - `types`: Core type definitions

pub mod builder;
pub mod reader;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use reader::SuffixArray;
pub use types::{SuffixArrayConfig, SuffixArrayStats};
