//! Search facade
//!
//! Owns the corpus, its index and the catalog, all built once and read-only
//! afterwards. A `Searcher` is shared between request workers behind an
//! `Arc` without locking.

use crate::corpus::{Boundary, Catalog, Corpus};
use crate::error::{LoadError, QueryError};
use crate::index::suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig};
use crate::query::extractor::{DocumentExtractor, Extraction};
use crate::query::resolver;
use crate::utils::progress::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Startup options
#[derive(Debug, Clone)]
pub struct SearcherOptions {
    /// Suffix array build settings
    pub index: SuffixArrayConfig,
    /// Refuse to start when a boundary exception no longer matches the corpus
    pub validate_exceptions: bool,
    /// Show a spinner while the index builds
    pub show_progress: bool,
}

impl Default for SearcherOptions {
    fn default() -> Self {
        Self {
            index: SuffixArrayConfig::default(),
            validate_exceptions: true,
            show_progress: false,
        }
    }
}

/// Answer to one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub query: String,
    /// Canonical title the query resolved to
    pub title: Option<String>,
    /// Corpus spans the text was cut from (empty when nothing matched)
    pub boundaries: Vec<Boundary>,
    /// Document body, or the "No Play Found" sentinel
    pub text: String,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        !self.boundaries.is_empty()
    }
}

pub struct Searcher {
    corpus: Corpus,
    index: SuffixArray,
    catalog: Catalog,
}

impl Searcher {
    /// Index `corpus` and check `catalog` against it
    pub fn new(
        corpus: Corpus,
        catalog: Catalog,
        options: &SearcherOptions,
    ) -> Result<Self, LoadError> {
        let pb = if options.show_progress {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
                pb.set_style(style);
            }
            pb.set_message(format!("Indexing {} bytes...", corpus.len()));
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let index = SuffixArrayBuilder::new(options.index.clone()).build(corpus.shared_text());
        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }
        let index = index?;

        let searcher = Self {
            corpus,
            index,
            catalog,
        };

        if options.validate_exceptions {
            searcher.extractor().validate_exceptions()?;
        }

        let stats = searcher.index.stats();
        tracing::info!(
            bytes = stats.text_size,
            titles = searcher.catalog.len(),
            exceptions = searcher.catalog.exceptions().len(),
            build_ms = stats.build_ms,
            "index ready"
        );

        Ok(searcher)
    }

    /// Read the corpus file at `path` and index it
    pub fn load(
        path: &Path,
        catalog: Catalog,
        options: &SearcherOptions,
    ) -> Result<Self, LoadError> {
        Self::new(Corpus::load(path)?, catalog, options)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &SuffixArray {
        &self.index
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn extractor(&self) -> DocumentExtractor<'_> {
        DocumentExtractor::new(&self.corpus, &self.index, &self.catalog)
    }

    /// Map a free-form query to a catalog title
    pub fn resolve(&self, query: &str) -> Option<&str> {
        resolver::resolve(query, self.catalog.titles())
    }

    pub fn extract(&self, title: Option<&str>) -> Extraction {
        self.extractor().extract(title)
    }

    /// Sorted offsets of a title in the corpus
    pub fn occurrences(&self, title: &str) -> Vec<usize> {
        self.extractor().occurrences(title)
    }

    /// Resolve `query` and extract the matching document
    ///
    /// Blank queries are rejected; a query that matches nothing is a normal
    /// result carrying the "No Play Found" text.
    pub fn search(&self, query: &str) -> Result<SearchResult, QueryError> {
        if query.trim().is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let title = self.resolve(query);
        let result = match self.extract(title) {
            Extraction::Found {
                title,
                boundaries,
                text,
                ..
            } => SearchResult {
                query: query.to_string(),
                title: Some(title),
                boundaries,
                text,
            },
            not_found @ Extraction::NotFound => SearchResult {
                query: query.to_string(),
                title: title.map(str::to_string),
                boundaries: Vec::new(),
                text: not_found.into_text(),
            },
        };

        tracing::debug!(
            query,
            title = result.title.as_deref(),
            bytes = result.text.len(),
            "search served"
        );

        Ok(result)
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("corpus_bytes", &self.corpus.len())
            .field("titles", &self.catalog.len())
            .field("index", &self.index)
            .finish()
    }
}
