use super::extract::extract_page;
use super::types::{ScrapeError, ScrapeResult};
use anyhow::Result;
use reqwest::Url;
use std::time::Duration;

/// Largest page body read before giving up.
pub const DEFAULT_MAX_PAGE_BYTES: usize = 2 * 1024 * 1024;

/// Downloads single pages and extracts their headline metadata.
pub struct PageScraper {
    http_client: reqwest::Client,
    max_body_bytes: usize,
}

impl PageScraper {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http_client,
            max_body_bytes: DEFAULT_MAX_PAGE_BYTES,
        })
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub async fn scrape(&self, raw_url: &str) -> Result<ScrapeResult, ScrapeError> {
        let url = validate_url(raw_url)?;
        tracing::debug!("Fetching page {}", url);

        let html = self.fetch_html(url).await?;
        Ok(extract_page(&html))
    }

    async fn fetch_html(&self, url: Url) -> Result<String, ScrapeError> {
        let mut response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UpstreamStatus(status.as_u16()));
        }

        let limit = self.max_body_bytes;
        if response.content_length().is_some_and(|len| len > limit as u64) {
            return Err(ScrapeError::PageTooLarge { limit });
        }

        // Content-Length may be absent or wrong, so the cap is enforced per chunk too.
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > limit {
                return Err(ScrapeError::PageTooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Accepts only absolute `http` and `https` URLs.
pub fn validate_url(raw_url: &str) -> Result<Url, ScrapeError> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err(ScrapeError::UrlRequired);
    }

    let url = Url::parse(trimmed).map_err(|_| ScrapeError::InvalidUrl(trimmed.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(ScrapeError::InvalidUrl(trimmed.to_string())),
    }
}
