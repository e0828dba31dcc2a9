//! Query answering: title resolution, boundary rules, document extraction

pub mod boundary;
pub mod extractor;
pub mod resolver;
pub mod searcher;

pub use boundary::{BoundaryException, BoundaryRule, DUPLICATE_SEPARATOR, OccurrenceKey};
pub use extractor::{DocumentExtractor, DocumentPlan, Extraction, NO_PLAY_FOUND};
pub use resolver::resolve;
pub use searcher::{SearchResult, Searcher, SearcherOptions};
