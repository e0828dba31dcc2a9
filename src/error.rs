use std::path::PathBuf;
use thiserror::Error;

use crate::query::boundary::OccurrenceKey;

/// Startup failures. Any of these aborts the service before it serves.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read corpus {path}: {source}")]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus {path} is not valid UTF-8 (first bad byte at offset {offset})")]
    CorpusEncoding { path: PathBuf, offset: usize },

    #[error("corpus is {size} bytes, the index supports at most {limit}")]
    CorpusTooLarge { size: u64, limit: u64 },

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("failed to read catalog {path}: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    CatalogFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("boundary exception {key} no longer matches the corpus: {reason}")]
    StaleException { key: OccurrenceKey, reason: String },
}

/// Request-level failures surfaced to the caller as client errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("missing search query")]
    EmptyQuery,
}
