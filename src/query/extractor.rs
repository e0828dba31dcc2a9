//! Document extraction
//!
//! Given a resolved title, finds where its document starts and ends in the
//! corpus and slices the body out. Boundaries are inferred from where titles
//! recur; see [`crate::query::boundary`] for the rules.

use crate::corpus::{Boundary, Catalog, Corpus};
use crate::error::LoadError;
use crate::index::suffix_array::SuffixArray;
use crate::query::boundary::{BoundaryRule, DUPLICATE_SEPARATOR, resolve_boundaries, rule_for};

/// Rendered text when no document matches
pub const NO_PLAY_FOUND: &str = "No Play Found";

/// Outcome of an extraction. Absence is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found {
        title: String,
        rule: BoundaryRule,
        boundaries: Vec<Boundary>,
        text: String,
    },
    NotFound,
}

impl Extraction {
    /// The text shown to the caller
    pub fn text(&self) -> &str {
        match self {
            Extraction::Found { text, .. } => text,
            Extraction::NotFound => NO_PLAY_FOUND,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Extraction::Found { text, .. } => text,
            Extraction::NotFound => NO_PLAY_FOUND.to_string(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found { .. })
    }
}

/// Where a document sits, before slicing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPlan {
    pub rule: BoundaryRule,
    pub boundaries: Vec<Boundary>,
}

/// Borrowing view over the read-only corpus, index and catalog
#[derive(Clone, Copy)]
pub struct DocumentExtractor<'a> {
    corpus: &'a Corpus,
    index: &'a SuffixArray,
    catalog: &'a Catalog,
}

impl<'a> DocumentExtractor<'a> {
    pub fn new(corpus: &'a Corpus, index: &'a SuffixArray, catalog: &'a Catalog) -> Self {
        Self {
            corpus,
            index,
            catalog,
        }
    }

    /// Sorted byte offsets of every occurrence of `title` (uppercased)
    pub fn occurrences(&self, title: &str) -> Vec<usize> {
        self.index.lookup(title.to_uppercase().as_bytes(), None)
    }

    /// Work out the boundaries of a title's document
    ///
    /// Returns `None` when the title is not in the catalog or never occurs.
    pub fn plan(&self, title: &str) -> Option<DocumentPlan> {
        let next_title = self.catalog.next_title(title)?;

        let current = self.occurrences(title);
        if current.is_empty() {
            return None;
        }
        let next = if next_title == title {
            current.clone()
        } else {
            self.occurrences(next_title)
        };

        let rule = rule_for(self.catalog.exceptions(), &current);
        let boundaries = resolve_boundaries(rule, &current, &next, self.corpus.len());

        tracing::debug!(
            title,
            next_title,
            occurrences = current.len(),
            next_occurrences = next.len(),
            ?rule,
            ?boundaries,
            "document planned"
        );

        Some(DocumentPlan { rule, boundaries })
    }

    /// Extract the body of `title`'s document
    pub fn extract(&self, title: Option<&str>) -> Extraction {
        let Some(title) = title else {
            return Extraction::NotFound;
        };
        let Some(plan) = self.plan(title) else {
            return Extraction::NotFound;
        };

        let text = plan
            .boundaries
            .iter()
            .map(|&boundary| self.corpus.slice(boundary))
            .collect::<Vec<_>>()
            .join(DUPLICATE_SEPARATOR);

        Extraction::Found {
            title: title.to_string(),
            rule: plan.rule,
            boundaries: plan.boundaries,
            text,
        }
    }

    /// Check every boundary exception against the corpus
    ///
    /// Exception keys are literal offsets into one revision of the corpus.
    /// Each must be claimed by a catalog title whose occurrence sits at that
    /// offset, and the resulting plan must select non-empty text inside the
    /// corpus. Stops at the first problem with a [`LoadError::StaleException`].
    pub fn validate_exceptions(&self) -> Result<(), LoadError> {
        for exception in self.catalog.exceptions() {
            let key = exception.key;
            let owner = self
                .catalog
                .titles()
                .iter()
                .find(|title| key.matches(&self.occurrences(title)));

            let Some(owner) = owner else {
                return Err(LoadError::StaleException {
                    key,
                    reason: "no title occurs at that offset".to_string(),
                });
            };

            let plan = self.plan(owner).ok_or_else(|| LoadError::StaleException {
                key,
                reason: format!("{owner} could not be located"),
            })?;

            if plan.rule != exception.rule {
                return Err(LoadError::StaleException {
                    key,
                    reason: format!("{owner} is shadowed by an earlier exception"),
                });
            }

            let expected_spans = match exception.rule {
                BoundaryRule::DuplicateConcat { .. } => 2,
                _ => 1,
            };
            if plan.boundaries.len() != expected_spans {
                return Err(LoadError::StaleException {
                    key,
                    reason: format!(
                        "{owner} resolved to {} span(s), expected {expected_spans}",
                        plan.boundaries.len()
                    ),
                });
            }

            let corpus_len = self.corpus.len();
            let fixed_end = match exception.rule {
                BoundaryRule::FixedEnd { end } | BoundaryRule::DuplicateConcat { end } => Some(end),
                _ => None,
            };
            if let Some(end) = fixed_end {
                if end > corpus_len {
                    return Err(LoadError::StaleException {
                        key,
                        reason: format!("end offset {end} is past the corpus ({corpus_len} bytes)"),
                    });
                }
                if !self.corpus.text().is_char_boundary(end) {
                    tracing::warn!(%key, end, "end offset splits a character, slice will be lossy");
                }
            }

            if let Some(empty) = plan.boundaries.iter().find(|b| b.is_empty()) {
                return Err(LoadError::StaleException {
                    key,
                    reason: format!("{owner} resolved to an empty span at {}", empty.start),
                });
            }

            tracing::debug!(
                %key,
                title = %owner,
                boundaries = ?plan.boundaries,
                "boundary exception verified"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_array::SuffixArrayBuilder;
    use crate::query::boundary::{BoundaryException, OccurrenceKey};

    struct Fixture {
        corpus: Corpus,
        index: SuffixArray,
        catalog: Catalog,
    }

    impl Fixture {
        fn new(text: &str, titles: &[&str], exceptions: Vec<BoundaryException>) -> Self {
            let corpus = Corpus::new(text);
            let index = SuffixArrayBuilder::with_defaults()
                .build(corpus.shared_text())
                .unwrap();
            let catalog = Catalog::new(titles, exceptions).unwrap();
            Self {
                corpus,
                index,
                catalog,
            }
        }

        fn extractor(&self) -> DocumentExtractor<'_> {
            DocumentExtractor::new(&self.corpus, &self.index, &self.catalog)
        }
    }

    const CONTENTS: &str = "Contents\nALPHA\nBETA\nGAMMA\n\n";
    const BODIES: &str = "ALPHA\nalpha body\n\nBETA\nbeta body\n\nGAMMA\ngamma body\n";

    fn regular() -> Fixture {
        Fixture::new(
            &format!("{CONTENTS}{BODIES}"),
            &["ALPHA", "BETA", "GAMMA"],
            Vec::new(),
        )
    }

    #[test]
    fn test_extract_default_boundaries() {
        let fixture = regular();
        let extractor = fixture.extractor();

        assert_eq!(
            extractor.extract(Some("ALPHA")).text(),
            "ALPHA\nalpha body\n\n"
        );
        assert_eq!(extractor.extract(Some("BETA")).text(), "BETA\nbeta body\n\n");
    }

    #[test]
    fn test_extract_last_title_runs_to_end() {
        let fixture = regular();
        assert_eq!(
            fixture.extractor().extract(Some("GAMMA")).text(),
            "GAMMA\ngamma body\n"
        );
    }

    #[test]
    fn test_extract_none_and_unknown() {
        let fixture = regular();
        let extractor = fixture.extractor();

        assert_eq!(extractor.extract(None), Extraction::NotFound);
        assert_eq!(extractor.extract(Some("DELTA")).text(), NO_PLAY_FOUND);
    }

    #[test]
    fn test_title_missing_from_corpus() {
        let fixture = Fixture::new(
            "Contents\nALPHA\n\nALPHA\nbody\n",
            &["ALPHA", "OMEGA"],
            Vec::new(),
        );
        let extractor = fixture.extractor();
        assert_eq!(extractor.extract(Some("OMEGA")), Extraction::NotFound);
        // Missing follower: run to the end of the corpus
        assert_eq!(extractor.extract(Some("ALPHA")).text(), "ALPHA\nbody\n");
    }

    #[test]
    fn test_occurrences_are_sorted_and_case_normalized() {
        let fixture = regular();
        let extractor = fixture.extractor();
        let occurrences = extractor.occurrences("beta");
        assert_eq!(occurrences.len(), 2);
        assert!(occurrences[0] < occurrences[1]);
        assert_eq!(&fixture.corpus.text()[occurrences[1]..occurrences[1] + 4], "BETA");
    }

    #[test]
    fn test_duplicate_concat_rule() {
        let text = "Contents\nSONG\nPOEM\n\nSONG\nverse one\n\n\
                    POEM\ncopy one\n\nPOEM\ncopy two\nEND";
        let first_poem = text.find("POEM").unwrap();
        let end = text.find("END").unwrap();
        let fixture = Fixture::new(
            text,
            &["SONG", "POEM"],
            vec![BoundaryException::new(
                OccurrenceKey::First(first_poem),
                BoundaryRule::DuplicateConcat { end },
            )],
        );

        let extraction = fixture.extractor().extract(Some("POEM"));
        let Extraction::Found { rule, boundaries, text, .. } = &extraction else {
            panic!("expected a document");
        };
        assert_eq!(*rule, BoundaryRule::DuplicateConcat { end });
        assert_eq!(boundaries.len(), 2);
        assert!(boundaries.iter().all(|b| !b.is_empty()));
        assert_eq!(text, "POEM\ncopy one\n\n\n \n \n \nPOEM\ncopy two\n");

        fixture.extractor().validate_exceptions().unwrap();
    }

    #[test]
    fn test_fixed_end_rule() {
        let text = "Contents\nFIRST\nSECOND\n\nFIRST\nbody\n[page]\nSecond\nmore\n";
        let second_first = text.rfind("FIRST").unwrap();
        let end = text.find("[page]").unwrap();
        let fixture = Fixture::new(
            text,
            &["FIRST", "SECOND"],
            vec![BoundaryException::new(
                OccurrenceKey::Second(second_first),
                BoundaryRule::FixedEnd { end },
            )],
        );

        assert_eq!(fixture.extractor().extract(Some("FIRST")).text(), "FIRST\nbody\n");
        fixture.extractor().validate_exceptions().unwrap();
    }

    #[test]
    fn test_single_front_matter_rule() {
        // GAMMA is missing from the contents, so its first occurrence is the heading
        let text = "Contents\nALPHA\nBETA\n\nALPHA\na\n\nBETA\nb\n\nGAMMA\ng\n";
        let gamma = text.find("GAMMA").unwrap();
        let fixture = Fixture::new(
            text,
            &["ALPHA", "BETA", "GAMMA"],
            vec![BoundaryException::new(
                OccurrenceKey::First(text.find("BETA").unwrap()),
                BoundaryRule::SingleFrontMatter,
            )],
        );
        let extractor = fixture.extractor();

        // Rule pins BETA to its listing line and the (missing) second GAMMA
        // falls back to the first GAMMA after it
        assert_eq!(
            extractor.plan("BETA").unwrap().boundaries,
            vec![Boundary::new(text.find("BETA").unwrap(), gamma)]
        );
        extractor.validate_exceptions().unwrap();
    }

    #[test]
    fn test_validate_rejects_stale_offset() {
        let fixture = Fixture::new(
            &format!("{CONTENTS}{BODIES}"),
            &["ALPHA", "BETA", "GAMMA"],
            vec![BoundaryException::new(
                OccurrenceKey::Second(3),
                BoundaryRule::FallbackToFirstNext,
            )],
        );

        let err = fixture.extractor().validate_exceptions().unwrap_err();
        assert!(matches!(
            err,
            LoadError::StaleException { key: OccurrenceKey::Second(3), .. }
        ));
    }

    #[test]
    fn test_validate_rejects_end_past_corpus() {
        let text = format!("{CONTENTS}{BODIES}");
        let beta = text.rfind("BETA").unwrap();
        let fixture = Fixture::new(
            &text,
            &["ALPHA", "BETA", "GAMMA"],
            vec![BoundaryException::new(
                OccurrenceKey::Second(beta),
                BoundaryRule::FixedEnd { end: text.len() + 1 },
            )],
        );

        let err = fixture.extractor().validate_exceptions().unwrap_err();
        assert!(err.to_string().contains("past the corpus"));
    }

    #[test]
    fn test_validate_rejects_missing_duplicate_copy() {
        let text = format!("{CONTENTS}{BODIES}");
        let fixture = Fixture::new(
            &text,
            &["ALPHA", "BETA", "GAMMA"],
            vec![BoundaryException::new(
                OccurrenceKey::First(text.find("GAMMA").unwrap()),
                BoundaryRule::DuplicateConcat { end: text.len() },
            )],
        );

        let err = fixture.extractor().validate_exceptions().unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn test_repeated_extraction_is_identical() {
        let fixture = regular();
        let extractor = fixture.extractor();
        let first = extractor.extract(Some("BETA"));
        for _ in 0..5 {
            assert_eq!(extractor.extract(Some("BETA")), first);
        }
    }
}
