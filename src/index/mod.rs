pub mod stats;
pub mod suffix_array;

pub use suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig};
