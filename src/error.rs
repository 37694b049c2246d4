//! HTTP-facing error type.
//!
//! Every [`ApiError`] renders as a JSON body `{"error": "message"}` with the
//! matching status code.

use crate::scrape::types::ScrapeError;
use crate::search::types::SearchError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// Invalid client input (400).
    BadRequest(String),
    /// A remote dependency failed or misbehaved (502).
    BadGateway(String),
    /// Unexpected server-side failure (500).
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::BadGateway(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.message() }));
        (status, body).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::QueryRequired => {
                ApiError::BadRequest(SearchError::QueryRequired.to_string())
            }
            SearchError::Upstream(source) => {
                tracing::error!("Search failed: {:#}", source);
                ApiError::Internal("Search failed".to_string())
            }
        }
    }
}

impl From<ScrapeError> for ApiError {
    fn from(err: ScrapeError) -> Self {
        match &err {
            ScrapeError::UrlRequired | ScrapeError::InvalidUrl(_) => {
                ApiError::BadRequest(err.client_message())
            }
            ScrapeError::Fetch(source) => {
                tracing::warn!("Scrape fetch failed: {}", source);
                ApiError::BadGateway(err.client_message())
            }
            ScrapeError::UpstreamStatus(_) | ScrapeError::PageTooLarge { .. } => {
                tracing::warn!("{}", err);
                ApiError::BadGateway(err.client_message())
            }
        }
    }
}
