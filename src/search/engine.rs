use super::ranker::rank;
use super::summarizer::{summarize, to_result_item};
use super::tokenizer::tokenize_query;
use super::types::{Document, SearchError, SearchResponse, SearchResultItem};
use crate::faq::repository::FaqRepository;
use std::sync::Arc;

/// Runs queries against the corpus exposed by a `FaqRepository`.
///
/// Holds no state besides the repository handle; every call rescores the
/// whole corpus.
pub struct SearchEngine {
    repository: Arc<dyn FaqRepository>,
}

impl SearchEngine {
    pub fn new(repository: Arc<dyn FaqRepository>) -> Self {
        Self { repository }
    }

    /// Validates the query, loads the corpus once and ranks it.
    ///
    /// # Returns
    /// * `Ok(SearchResponse::Matches)` with up to three results and a summary.
    /// * `Ok(SearchResponse::NoMatches)` when no document scores above zero.
    /// * `Err(SearchError::QueryRequired)` for blank queries, before any read.
    /// * `Err(SearchError::Upstream)` when the repository fails.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let query = validate_query(query)?;

        let documents = self
            .repository
            .get_all()
            .await
            .map_err(SearchError::Upstream)?;

        Ok(build_response(query, documents))
    }
}

/// Trims the query, rejecting it when nothing is left.
pub fn validate_query(query: &str) -> Result<&str, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::QueryRequired);
    }
    Ok(query)
}

/// Pure search over an already loaded corpus.
pub fn search_documents(
    query: &str,
    documents: Vec<Document>,
) -> Result<SearchResponse, SearchError> {
    let query = validate_query(query)?;
    Ok(build_response(query, documents))
}

/// Ranks and summarizes for a query that already passed `validate_query`.
fn build_response(query: &str, documents: Vec<Document>) -> SearchResponse {
    let terms = tokenize_query(query);
    tracing::debug!(
        "Scoring {} documents against {} term(s) for query '{}'",
        documents.len(),
        terms.len(),
        query
    );

    let ranked = rank(documents, &terms);

    if ranked.is_empty() {
        return SearchResponse::no_matches();
    }

    let results: Vec<SearchResultItem> = ranked.iter().map(to_result_item).collect();
    let sources = results.iter().map(|r| r.id).collect();
    let summary = summarize(&results).unwrap_or_default();

    SearchResponse::Matches {
        results,
        summary,
        sources,
    }
}
