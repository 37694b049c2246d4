use super::engine::SearchEngine;
use super::types::{SearchRequest, SearchResponse};
use crate::error::ApiError;
use axum::body::Bytes;
use axum::{Extension, Json};
use serde_json::{Value, json};
use std::sync::Arc;

/// `POST /api/search`
///
/// The body is read as JSON whatever its `Content-Type`. A missing or
/// unparsable body is treated like an empty query.
pub async fn handle_search(
    Extension(engine): Extension<Arc<SearchEngine>>,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let request = parse_search_request(&body);
    let query = request.query.unwrap_or_default();

    let response = engine.search(&query).await?;
    tracing::info!(
        "Search '{}' returned {} result(s)",
        query.trim(),
        response.results().len()
    );

    Ok(Json(response))
}

/// `GET /api/search`
pub async fn handle_search_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn parse_search_request(body: &[u8]) -> SearchRequest {
    serde_json::from_slice(body).unwrap_or_else(|err| {
        tracing::debug!("Ignoring unreadable search body: {}", err);
        SearchRequest::default()
    })
}
