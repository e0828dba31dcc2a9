//! Immutable corpus text

use crate::error::LoadError;
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

/// Half-open byte interval `[start, end)` of the corpus holding one
/// document body (or one span of it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Boundary {
    pub start: usize,
    pub end: usize,
}

impl Boundary {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "boundary start {start} after end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The full concatenated source text, loaded once and never mutated
#[derive(Debug, Clone)]
pub struct Corpus {
    text: Arc<str>,
}

impl Corpus {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    /// Read a corpus file from disk
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::CorpusUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| LoadError::CorpusEncoding {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })?;

        tracing::info!(path = %path.display(), bytes = text.len(), "corpus loaded");
        Ok(Self::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Shared handle to the text, for the index
    pub fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text covered by `boundary`, clamped to the corpus
    ///
    /// Offsets that split a multi-byte character are decoded lossily rather
    /// than rejected.
    pub fn slice(&self, boundary: Boundary) -> Cow<'_, str> {
        let end = boundary.end.min(self.len());
        let start = boundary.start.min(end);
        match self.text.get(start..end) {
            Some(text) => Cow::Borrowed(text),
            None => String::from_utf8_lossy(&self.text.as_bytes()[start..end]),
        }
    }
}
