use super::service::PageScraper;
use super::types::{ScrapeParams, ScrapeResult};
use crate::error::ApiError;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /api/scrape?url=...`
pub async fn handle_scrape(
    Query(params): Query<ScrapeParams>,
    Extension(scraper): Extension<Arc<PageScraper>>,
) -> Result<Json<ScrapeResult>, ApiError> {
    let url = params.url.unwrap_or_default();

    let result = scraper.scrape(&url).await?;
    tracing::info!("Scraped {}", url.trim());

    Ok(Json(result))
}
