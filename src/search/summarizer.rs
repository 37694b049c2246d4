//! Extractive summary over the top-ranked results.

use super::types::{ScoredDocument, SearchResultItem};
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of body characters kept in a result snippet.
pub const SNIPPET_CHARS: usize = 160;

/// Number of sentence segments kept in a summary.
pub const SUMMARY_SENTENCES: usize = 3;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.?!]+").expect("valid regex literal"));

/// First `SNIPPET_CHARS` characters of `body`, cut without regard to words.
pub fn snippet(body: &str) -> String {
    body.chars().take(SNIPPET_CHARS).collect()
}

pub fn to_result_item(scored: &ScoredDocument) -> SearchResultItem {
    SearchResultItem {
        id: scored.item.id,
        title: scored.item.title.clone(),
        snippet: snippet(&scored.item.body),
    }
}

/// Builds a summary from the first few sentences of the results' text.
///
/// Returns `None` when there are no results.
pub fn summarize(results: &[SearchResultItem]) -> Option<String> {
    if results.is_empty() {
        return None;
    }

    let combined = results
        .iter()
        .map(|r| format!("{}: {}", r.title, r.snippet))
        .collect::<Vec<_>>()
        .join(" ");

    let summary = SENTENCE_END
        .split(&combined)
        .take(SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(". ");

    Some(summary.trim().to_string())
}
