//! # folio - title search over a fixed text corpus
//!
//! folio answers title queries against one large concatenated text (by
//! default the complete works of Shakespeare) and returns the full text of
//! the matching document.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`corpus`] - The immutable corpus text and the ordered title catalog
//! - [`index`] - Suffix array built once over the corpus for substring lookup
//! - [`query`] - Title resolution, boundary rules and document extraction
//! - [`server`] - HTTP boundary (axum) over a shared, read-only searcher
//! - [`output`] - Terminal formatting for the CLI
//! - [`config`] - Serving configuration
//! - [`utils`] - Logging setup and progress display
//!
//! ## Quick Start
//!
//! ```no_run
//! use folio::corpus::Catalog;
//! use folio::query::{Searcher, SearcherOptions};
//! use std::path::Path;
//!
//! let searcher = Searcher::load(
//!     Path::new("completeworks.txt"),
//!     Catalog::shakespeare(),
//!     &SearcherOptions::default(),
//! )
//! .unwrap();
//!
//! let result = searcher.search("hamlet").unwrap();
//! println!("{}", result.text);
//! ```
//!
//! ## How documents are found
//!
//! The corpus has no markup between documents. Every title normally occurs
//! twice: once in the contents listing and once as its document's heading.
//! A document runs from the second occurrence of its title to the second
//! occurrence of the next title in catalog order. Documents that break that
//! pattern are described by a small exception table in the catalog, checked
//! against the corpus when the searcher is built.

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod server;
pub mod utils;
