use super::scorer::score_document;
use super::types::{Document, ScoredDocument};

/// Maximum number of documents returned for a query.
pub const MAX_RESULTS: usize = 3;

/// Scores every document and returns the best matches, highest score first.
///
/// Documents scoring zero are dropped. Equal scores keep their corpus order.
/// An empty result means nothing matched.
pub fn rank(documents: Vec<Document>, terms: &[String]) -> Vec<ScoredDocument> {
    let mut scored: Vec<ScoredDocument> = documents
        .into_iter()
        .filter_map(|item| {
            let score = score_document(&item, terms).total();
            (score > 0).then_some(ScoredDocument { item, score })
        })
        .collect();

    // `sort_by` is stable, which preserves corpus order on ties.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RESULTS);
    scored
}
