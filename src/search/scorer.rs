//! Lexical relevance scoring.
//!
//! A document's score is the number of literal, case-insensitive term
//! occurrences in its title and body, with title hits weighted double.

use super::types::Document;

/// Multiplier applied to occurrences found in a document title.
pub const TITLE_WEIGHT: usize = 2;

/// Per-field occurrence counts for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentScore {
    pub title: usize,
    pub body: usize,
}

impl DocumentScore {
    pub fn total(&self) -> usize {
        self.title * TITLE_WEIGHT + self.body
    }
}

/// Counts non-overlapping occurrences of `term` in `text`, ignoring case.
///
/// The term is matched as a literal string, so `"c++"` or `"(a)"` carry no
/// special meaning. An empty term counts as zero.
pub fn count_occurrences(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    let haystack = text.to_lowercase();
    let needle = term.to_lowercase();
    haystack.matches(needle.as_str()).count()
}

/// Sums the occurrences of every term in `target`.
pub fn score_text(target: &str, terms: &[String]) -> usize {
    terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| count_occurrences(target, term))
        .sum()
}

pub fn score_document(document: &Document, terms: &[String]) -> DocumentScore {
    DocumentScore {
        title: score_text(&document.title, terms),
        body: score_text(&document.body, terms),
    }
}
