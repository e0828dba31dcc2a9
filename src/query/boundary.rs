//! Document boundary rules
//!
//! A document usually starts at the second occurrence of its title (the
//! first being the contents listing) and ends at the second occurrence of
//! the next title. Corpora are irregular, so a table of exceptions keyed by
//! a known occurrence offset can swap in a different rule for a document.
//! Exceptions are plain data and are evaluated in table order before the
//! general rule.

use crate::corpus::Boundary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text placed between the two copies of a duplicated document
pub const DUPLICATE_SEPARATOR: &str = "\n \n \n \n";

/// Identifies a document by where one of its title occurrences sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceKey {
    /// The first (lowest) occurrence is at this byte offset
    First(usize),
    /// The second occurrence is at this byte offset
    Second(usize),
}

impl OccurrenceKey {
    /// Index into the sorted occurrence list this key inspects
    pub fn ordinal(&self) -> usize {
        match self {
            OccurrenceKey::First(_) => 0,
            OccurrenceKey::Second(_) => 1,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            OccurrenceKey::First(offset) | OccurrenceKey::Second(offset) => *offset,
        }
    }

    /// Does this key match a sorted occurrence list?
    pub fn matches(&self, occurrences: &[usize]) -> bool {
        occurrences.get(self.ordinal()) == Some(&self.offset())
    }
}

impl fmt::Display for OccurrenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccurrenceKey::First(offset) => write!(f, "first occurrence at {offset}"),
            OccurrenceKey::Second(offset) => write!(f, "second occurrence at {offset}"),
        }
    }
}

/// How to turn a document's title occurrences into body boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundaryRule {
    /// `(current[1], next[1])`
    #[default]
    Default,
    /// Only one front-matter line precedes the heading: `(current[0], next[1])`
    SingleFrontMatter,
    /// The next title's second occurrence is unreliable: `(current[1], next[0])`
    FallbackToFirstNext,
    /// The next title cannot be located at all: `(current[1], end)`
    FixedEnd { end: usize },
    /// The document appears twice in full:
    /// `(current[1], current[2])` and `(current[2], end)`
    DuplicateConcat { end: usize },
}

/// One entry of the exception table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryException {
    pub key: OccurrenceKey,
    pub rule: BoundaryRule,
    /// Free-form reminder of which document this is for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BoundaryException {
    pub fn new(key: OccurrenceKey, rule: BoundaryRule) -> Self {
        Self {
            key,
            rule,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Pick the rule for a document from its sorted title occurrences
///
/// The first exception whose key matches wins; otherwise the general rule.
pub fn rule_for(exceptions: &[BoundaryException], current: &[usize]) -> BoundaryRule {
    exceptions
        .iter()
        .find(|exception| exception.key.matches(current))
        .map(|exception| exception.rule)
        .unwrap_or_default()
}

/// Resolve body boundaries for a document
///
/// `current` and `next` are the sorted occurrences of the document's title
/// and of the following title (the same list for the last document).
///
/// When the occurrence a rule asks for is missing, or would end the body at
/// or before its start, the start falls back to the first occurrence and the
/// end to the first next-title occurrence after the start, else the end of
/// the corpus.
pub fn resolve_boundaries(
    rule: BoundaryRule,
    current: &[usize],
    next: &[usize],
    corpus_len: usize,
) -> Vec<Boundary> {
    let Some(&first) = current.first() else {
        return Vec::new();
    };
    let heading = current.get(1).copied().unwrap_or(first);

    match rule {
        BoundaryRule::Default => vec![single_span(heading, next.get(1).copied(), next, corpus_len)],
        BoundaryRule::SingleFrontMatter => {
            vec![single_span(first, next.get(1).copied(), next, corpus_len)]
        }
        BoundaryRule::FallbackToFirstNext => {
            vec![single_span(heading, next.first().copied(), next, corpus_len)]
        }
        BoundaryRule::FixedEnd { end } => vec![single_span(heading, Some(end), next, corpus_len)],
        BoundaryRule::DuplicateConcat { end } => {
            let end = end.min(corpus_len);
            match (current.get(1), current.get(2)) {
                (Some(&second), Some(&third)) if second < third && third < end => {
                    vec![Boundary::new(second, third), Boundary::new(third, end)]
                }
                _ => vec![single_span(heading, next.get(1).copied(), next, corpus_len)],
            }
        }
    }
}

fn single_span(start: usize, end: Option<usize>, next: &[usize], corpus_len: usize) -> Boundary {
    let start = start.min(corpus_len);
    let end = match end {
        Some(end) if end > start => end.min(corpus_len),
        _ => next
            .iter()
            .copied()
            .find(|&offset| offset > start)
            .unwrap_or(corpus_len),
    };
    Boundary::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEN: usize = 10_000;

    fn span(start: usize, end: usize) -> Vec<Boundary> {
        vec![Boundary::new(start, end)]
    }

    #[test]
    fn test_default_rule_uses_second_occurrences() {
        let bounds = resolve_boundaries(BoundaryRule::Default, &[10, 500], &[20, 900], LEN);
        assert_eq!(bounds, span(500, 900));
    }

    #[test]
    fn test_single_front_matter() {
        let bounds =
            resolve_boundaries(BoundaryRule::SingleFrontMatter, &[480, 500], &[20, 900], LEN);
        assert_eq!(bounds, span(480, 900));
    }

    #[test]
    fn test_fallback_to_first_next() {
        let bounds =
            resolve_boundaries(BoundaryRule::FallbackToFirstNext, &[10, 500], &[900], LEN);
        assert_eq!(bounds, span(500, 900));
    }

    #[test]
    fn test_fixed_end() {
        let rule = BoundaryRule::FixedEnd { end: 750 };
        assert_eq!(resolve_boundaries(rule, &[10, 500], &[20, 900], LEN), span(500, 750));

        let past_end = BoundaryRule::FixedEnd { end: LEN + 50 };
        assert_eq!(resolve_boundaries(past_end, &[10, 500], &[20], LEN), span(500, LEN));
    }

    #[test]
    fn test_duplicate_concat() {
        let rule = BoundaryRule::DuplicateConcat { end: 2000 };
        let bounds = resolve_boundaries(rule, &[10, 500, 1200], &[10, 500, 1200], LEN);
        assert_eq!(
            bounds,
            vec![Boundary::new(500, 1200), Boundary::new(1200, 2000)]
        );
    }

    #[test]
    fn test_duplicate_concat_without_third_copy() {
        let rule = BoundaryRule::DuplicateConcat { end: 2000 };
        let bounds = resolve_boundaries(rule, &[10, 500], &[10, 500], LEN);
        assert_eq!(bounds, span(500, LEN));
    }

    #[test]
    fn test_self_referential_next_runs_to_following_copy() {
        let occurrences = [10, 500, 800];
        let bounds = resolve_boundaries(BoundaryRule::Default, &occurrences, &occurrences, LEN);
        assert_eq!(bounds, span(500, 800));
    }

    #[test]
    fn test_self_referential_next_runs_to_end_of_corpus() {
        let occurrences = [10, 500];
        let bounds = resolve_boundaries(BoundaryRule::Default, &occurrences, &occurrences, LEN);
        assert_eq!(bounds, span(500, LEN));
    }

    #[test]
    fn test_single_occurrence_starts_at_first() {
        let bounds = resolve_boundaries(BoundaryRule::Default, &[300], &[20, 900], LEN);
        assert_eq!(bounds, span(300, 900));
    }

    #[test]
    fn test_next_second_occurrence_before_start() {
        // The following title is listed twice up front, then heads its document
        let bounds = resolve_boundaries(BoundaryRule::Default, &[10, 500], &[20, 40, 900], LEN);
        assert_eq!(bounds, span(500, 900));
    }

    #[test]
    fn test_no_occurrences() {
        assert!(resolve_boundaries(BoundaryRule::Default, &[], &[20, 900], LEN).is_empty());
    }

    #[test]
    fn test_rule_for_first_match_wins() {
        let table = vec![
            BoundaryException::new(OccurrenceKey::Second(500), BoundaryRule::FallbackToFirstNext),
            BoundaryException::new(OccurrenceKey::First(10), BoundaryRule::SingleFrontMatter),
        ];

        assert_eq!(rule_for(&table, &[10, 500]), BoundaryRule::FallbackToFirstNext);
        assert_eq!(rule_for(&table, &[10, 600]), BoundaryRule::SingleFrontMatter);
        assert_eq!(rule_for(&table, &[11, 600]), BoundaryRule::Default);
        assert_eq!(rule_for(&table, &[]), BoundaryRule::Default);
    }

    #[test]
    fn test_key_matching() {
        assert!(OccurrenceKey::First(10).matches(&[10, 20]));
        assert!(!OccurrenceKey::First(20).matches(&[10, 20]));
        assert!(OccurrenceKey::Second(20).matches(&[10, 20]));
        assert!(!OccurrenceKey::Second(20).matches(&[20]));
    }

    #[test]
    fn test_exception_json_format() {
        let exception = BoundaryException::new(
            OccurrenceKey::Second(1323176),
            BoundaryRule::FixedEnd { end: 1651327 },
        );
        let json = serde_json::to_string(&exception).unwrap();
        assert_eq!(
            json,
            r#"{"key":{"second":1323176},"rule":{"kind":"fixed_end","end":1651327}}"#
        );

        let parsed: BoundaryException = serde_json::from_str(
            r#"{
                "key": {"first": 2890},
                "rule": {"kind": "duplicate_concat", "end": 5745664},
                "note": "VENUS AND ADONIS"
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.key, OccurrenceKey::First(2890));
        assert_eq!(parsed.rule, BoundaryRule::DuplicateConcat { end: 5745664 });
        assert_eq!(parsed.note.as_deref(), Some("VENUS AND ADONIS"));
    }
}
