use crate::config::Config;
use crate::faq::repository::{FaqRepository, FileFaqRepository, StaticFaqRepository};
use crate::scrape::handlers::handle_scrape;
use crate::scrape::service::PageScraper;
use crate::search::engine::SearchEngine;
use crate::search::handlers::{handle_search, handle_search_health};
use anyhow::Result;
use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const ENDPOINT_SEARCH: &str = "/api/search";
pub const ENDPOINT_SCRAPE: &str = "/api/scrape";

pub fn build_router(engine: Arc<SearchEngine>, scraper: Arc<PageScraper>) -> Router {
    Router::new()
        .route(ENDPOINT_SEARCH, get(handle_search_health).post(handle_search))
        .route(ENDPOINT_SCRAPE, get(handle_scrape))
        .layer(Extension(engine))
        .layer(Extension(scraper))
        .layer(TraceLayer::new_for_http())
}

/// Picks the corpus source named by the configuration.
pub fn repository_from_config(config: &Config) -> Result<Arc<dyn FaqRepository>> {
    match &config.faq_file {
        Some(path) => {
            tracing::info!("Serving FAQ corpus from {}", path.display());
            Ok(Arc::new(FileFaqRepository::new(path.clone())))
        }
        None => {
            let repo = StaticFaqRepository::builtin()?;
            tracing::info!("Serving bundled FAQ corpus ({} entries)", repo.len());
            Ok(Arc::new(repo))
        }
    }
}

pub fn router_from_config(config: &Config) -> Result<Router> {
    let engine = Arc::new(SearchEngine::new(repository_from_config(config)?));
    let scraper = Arc::new(
        PageScraper::new(config.scrape_timeout(), &config.user_agent)?
            .with_max_body_bytes(config.scrape_max_bytes),
    );

    Ok(build_router(engine, scraper))
}
