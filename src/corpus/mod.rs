//! The source text and the registry of titles that divide it

pub mod catalog;
pub mod store;

pub use catalog::{Catalog, CatalogFile, SHAKESPEARE_TITLES};
pub use store::{Boundary, Corpus};
