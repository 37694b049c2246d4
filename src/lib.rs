//! FAQ Search & Page Scrape Library
//!
//! This library crate holds everything the `faq-insight` binary serves.
//!
//! ## Modules
//! - **`search`**: Keyword scoring, top-3 ranking and the extractive summary.
//! - **`faq`**: Corpus repositories (bundled JSON, file-backed, in-memory).
//! - **`scrape`**: Single-page fetch and title / meta description / `<h1>` extraction.
//! - **`app`**: Axum router wiring for both features.
//! - **`config`**: Command-line and environment settings.
//! - **`error`**: HTTP error mapping.

pub mod app;
pub mod config;
pub mod error;
pub mod faq;
pub mod scrape;
pub mod search;
