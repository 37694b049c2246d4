//! Scrape Data Types
//!
//! Query parameters, the extracted page summary and the scrape error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Deserialize, Default)]
pub struct ScrapeParams {
    pub url: Option<String>,
}

/// Headline metadata read from a page. Absent elements are `null` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub h1: Option<String>,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("URL required!")]
    UrlRequired,

    #[error("invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),

    #[error("page exceeds {limit} bytes")]
    PageTooLarge { limit: usize },
}

impl ScrapeError {
    /// Message safe to hand back to API clients.
    pub fn client_message(&self) -> String {
        match self {
            ScrapeError::UrlRequired => "URL required!".to_string(),
            ScrapeError::InvalidUrl(_) => "Invalid URL".to_string(),
            ScrapeError::Fetch(_) => "Failed to fetch page".to_string(),
            ScrapeError::UpstreamStatus(code) => format!("Upstream responded with status {}", code),
            ScrapeError::PageTooLarge { .. } => "Page too large".to_string(),
        }
    }
}
