//! Synthetic corpus laid out like the complete works: a contents listing
//! naming every title once, then each document under its own heading.

#![allow(dead_code)]

use folio::corpus::{Catalog, Corpus, SHAKESPEARE_TITLES};
use folio::query::{BoundaryException, Searcher, SearcherOptions};

pub const PREAMBLE: &str = "The Project Gutenberg eBook of The Complete Works\n\n";

pub fn body_of(title: &str) -> String {
    let lower = title.to_lowercase();
    format!("ACT I. SCENE I.\nEnter the players of {lower}.\n\nExeunt.\n\n")
}

/// Corpus text with every catalog title listed once up front and once as a heading
pub fn corpus_text(titles: &[&str]) -> String {
    let mut text = String::from(PREAMBLE);
    text.push_str("Contents\n\n");
    for title in titles {
        text.push_str(&format!("    {title}\n"));
    }
    text.push_str("\n\n\n");
    for title in titles {
        text.push_str(title);
        text.push_str("\n\n");
        text.push_str(&body_of(title));
        text.push_str("\n\n\n");
    }
    text
}

/// The document as the default rule should cut it: heading up to the next heading
pub fn expected_document(text: &str, titles: &[&str], position: usize) -> String {
    let start = nth_occurrence(text, titles[position], 1);
    let end = match titles.get(position + 1) {
        Some(next) => nth_occurrence(text, next, 1),
        None => text.len(),
    };
    text[start..end].to_string()
}

pub fn nth_occurrence(text: &str, pattern: &str, n: usize) -> usize {
    text.match_indices(pattern)
        .nth(n)
        .map(|(offset, _)| offset)
        .unwrap_or_else(|| panic!("{pattern:?} occurs fewer than {} times", n + 1))
}

pub fn shakespeare_searcher() -> (String, Searcher) {
    searcher_with(SHAKESPEARE_TITLES, Vec::new())
}

pub fn searcher_with(titles: &[&str], exceptions: Vec<BoundaryException>) -> (String, Searcher) {
    let text = corpus_text(titles);
    let searcher = searcher_for(&text, titles, exceptions);
    (text, searcher)
}

pub fn searcher_for(text: &str, titles: &[&str], exceptions: Vec<BoundaryException>) -> Searcher {
    let catalog = Catalog::new(titles, exceptions).expect("valid catalog");
    Searcher::new(Corpus::new(text), catalog, &SearcherOptions::default()).expect("searcher builds")
}
