//! Title registry
//!
//! The catalog is the ordered list of canonical document titles plus the
//! boundary exception table for the corpus they describe. Title order
//! defines document adjacency: a document ends where the next title's
//! document begins.

use crate::error::LoadError;
use crate::query::boundary::{BoundaryException, BoundaryRule, OccurrenceKey};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk catalog layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub titles: Vec<String>,
    #[serde(default)]
    pub exceptions: Vec<BoundaryException>,
}

/// Ordered, validated title registry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct Catalog {
    titles: Vec<String>,
    exceptions: Vec<BoundaryException>,
    positions: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, normalizing titles to uppercase
    ///
    /// Fails on an empty list, blank titles, or titles that collide once
    /// uppercased.
    pub fn new(
        titles: impl IntoIterator<Item = impl AsRef<str>>,
        exceptions: Vec<BoundaryException>,
    ) -> Result<Self, LoadError> {
        let titles: Vec<String> = titles
            .into_iter()
            .map(|title| title.as_ref().trim().to_uppercase())
            .collect();

        if titles.is_empty() {
            return Err(LoadError::InvalidCatalog("no titles".to_string()));
        }

        let mut positions = FxHashMap::default();
        for (position, title) in titles.iter().enumerate() {
            if title.is_empty() {
                return Err(LoadError::InvalidCatalog(format!(
                    "title #{position} is blank"
                )));
            }
            if positions.insert(title.clone(), position).is_some() {
                return Err(LoadError::InvalidCatalog(format!(
                    "duplicate title {title:?}"
                )));
            }
        }

        Ok(Self {
            titles,
            exceptions,
            positions,
        })
    }

    /// Read a JSON catalog file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let data = std::fs::read(path).map_err(|source| LoadError::CatalogUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| LoadError::CatalogFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn exceptions(&self) -> &[BoundaryException] {
        &self.exceptions
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Position of a title in document order
    pub fn position(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    /// The title whose document follows `title`
    ///
    /// The last title has no follower and is its own delimiter.
    pub fn next_title(&self, title: &str) -> Option<&str> {
        let position = self.position(title)?;
        let next = self.titles.get(position + 1).unwrap_or(&self.titles[position]);
        Some(next)
    }

    /// The complete works of Shakespeare, as laid out in the Project
    /// Gutenberg `completeworks.txt` revision the exception table targets
    pub fn shakespeare() -> Self {
        let exceptions = vec![
            BoundaryException::new(OccurrenceKey::First(5040318), BoundaryRule::SingleFrontMatter)
                .with_note("TWELFTH NIGHT: OR, WHAT YOU WILL"),
            BoundaryException::new(OccurrenceKey::First(3615472), BoundaryRule::SingleFrontMatter)
                .with_note("OTHELLO, THE MOOR OF VENICE"),
            BoundaryException::new(
                OccurrenceKey::Second(3463991),
                BoundaryRule::FallbackToFirstNext,
            )
            .with_note("MUCH ADO ABOUT NOTHING"),
            BoundaryException::new(
                OccurrenceKey::Second(4874441),
                BoundaryRule::FallbackToFirstNext,
            )
            .with_note("TROILUS AND CRESSIDA"),
            BoundaryException::new(
                OccurrenceKey::Second(1323176),
                BoundaryRule::FixedEnd { end: 1651327 },
            )
            .with_note("THE SECOND PART OF KING HENRY THE FOURTH"),
            BoundaryException::new(
                OccurrenceKey::First(2890),
                BoundaryRule::DuplicateConcat { end: 5745664 },
            )
            .with_note("VENUS AND ADONIS"),
        ];

        let titles: Vec<String> = SHAKESPEARE_TITLES.iter().map(|t| t.to_string()).collect();
        let positions = titles
            .iter()
            .enumerate()
            .map(|(position, title)| (title.clone(), position))
            .collect();

        Self {
            titles,
            exceptions,
            positions,
        }
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = LoadError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        Catalog::new(file.titles, file.exceptions)
    }
}

impl From<Catalog> for CatalogFile {
    fn from(catalog: Catalog) -> Self {
        CatalogFile {
            titles: catalog.titles,
            exceptions: catalog.exceptions,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::shakespeare()
    }
}

/// Headings of the complete works, in the order they appear
pub const SHAKESPEARE_TITLES: &[&str] = &[
    "THE SONNETS",
    "ALL’S WELL THAT ENDS WELL",
    "ANTONY AND CLEOPATRA",
    "AS YOU LIKE IT",
    "THE COMEDY OF ERRORS",
    "THE TRAGEDY OF CORIOLANUS",
    "CYMBELINE",
    "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK",
    "THE FIRST PART OF KING HENRY THE FOURTH",
    "THE SECOND PART OF KING HENRY THE FOURTH",
    "THE LIFE OF KING HENRY THE FIFTH",
    "THE FIRST PART OF HENRY THE SIXTH",
    "THE SECOND PART OF KING HENRY THE SIXTH",
    "THE THIRD PART OF KING HENRY THE SIXTH",
    "KING HENRY THE EIGHTH",
    "KING JOHN",
    "THE TRAGEDY OF JULIUS CAESAR",
    "THE TRAGEDY OF KING LEAR",
    "LOVE’S LABOUR’S LOST",
    "MACBETH",
    "MEASURE FOR MEASURE",
    "THE MERCHANT OF VENICE",
    "THE MERRY WIVES OF WINDSOR",
    "A MIDSUMMER NIGHT’S DREAM",
    "MUCH ADO ABOUT NOTHING",
    "OTHELLO, THE MOOR OF VENICE",
    "PERICLES, PRINCE OF TYRE",
    "KING RICHARD THE SECOND",
    "KING RICHARD THE THIRD",
    "ROMEO AND JULIET",
    "THE TAMING OF THE SHREW",
    "THE TEMPEST",
    "TIMON OF ATHENS",
    "TITUS ANDRONICUS",
    "TROILUS AND CRESSIDA",
    "TWELFTH NIGHT: OR, WHAT YOU WILL",
    "THE TWO GENTLEMEN OF VERONA",
    "THE TWO NOBLE KINSMEN",
    "THE WINTER’S TALE",
    "A LOVER’S COMPLAINT",
    "THE PASSIONATE PILGRIM",
    "THE PHOENIX AND THE TURTLE",
    "THE RAPE OF LUCRECE",
    "VENUS AND ADONIS",
];
