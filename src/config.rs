//! Command-line and environment configuration for the API node.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_SCRAPE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SCRAPE_MAX_BYTES: usize = crate::scrape::service::DEFAULT_MAX_PAGE_BYTES;
pub const DEFAULT_USER_AGENT: &str = concat!("faq-insight/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug, Clone)]
#[command(name = "faq-insight", about = "FAQ search and page scrape API")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "FAQ_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// JSON file with the FAQ corpus (defaults to the bundled corpus)
    #[arg(long, env = "FAQ_FILE")]
    pub faq_file: Option<PathBuf>,

    /// Timeout for fetching a page to scrape, in seconds
    #[arg(long, env = "SCRAPE_TIMEOUT_SECS", default_value_t = DEFAULT_SCRAPE_TIMEOUT_SECS)]
    pub scrape_timeout_secs: u64,

    /// Largest page body the scraper will download, in bytes
    #[arg(long, env = "SCRAPE_MAX_BYTES", default_value_t = DEFAULT_SCRAPE_MAX_BYTES)]
    pub scrape_max_bytes: usize,

    /// User-Agent header sent when scraping
    #[arg(long, env = "SCRAPE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Config {
    pub fn scrape_timeout(&self) -> Duration {
        Duration::from_secs(self.scrape_timeout_secs)
    }
}
