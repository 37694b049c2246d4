use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a FAQ entry, unique within a corpus.
pub type DocumentId = u64;

/// A FAQ entry as supplied by the repository. Never mutated by the search core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub body: String,
}

impl Document {
    pub fn new(id: DocumentId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A document paired with its relevance score for a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredDocument {
    pub item: Document,
    pub score: usize,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: DocumentId,
    pub title: String,
    pub snippet: String,
}

/// Outcome of a successful search.
///
/// Serialized untagged, so the wire shape is either
/// `{results, summary, sources}` or `{results: [], message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Matches {
        results: Vec<SearchResultItem>,
        summary: String,
        sources: Vec<DocumentId>,
    },
    NoMatches {
        results: Vec<SearchResultItem>,
        message: String,
    },
}

impl SearchResponse {
    pub const NO_MATCHES_MESSAGE: &'static str = "No matches found";

    pub fn no_matches() -> Self {
        SearchResponse::NoMatches {
            results: Vec::new(),
            message: Self::NO_MATCHES_MESSAGE.to_string(),
        }
    }

    pub fn results(&self) -> &[SearchResultItem] {
        match self {
            SearchResponse::Matches { results, .. } | SearchResponse::NoMatches { results, .. } => {
                results
            }
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            SearchResponse::Matches { summary, .. } => Some(summary),
            SearchResponse::NoMatches { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was missing or blank after trimming.
    #[error("Query required!")]
    QueryRequired,

    /// The document repository could not produce the corpus.
    #[error("failed to load documents: {0}")]
    Upstream(#[source] anyhow::Error),
}
