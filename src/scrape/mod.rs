//! Page Scrape Module
//!
//! Fetches a single user-supplied web page and pulls out its headline metadata.
//! Independent of the search pipeline.
//!
//! ## Workflow
//! 1. **Validate**: Trims the URL and accepts only absolute `http`/`https` addresses.
//! 2. **Download**: Fetches the page body with a shared `reqwest::Client`.
//! 3. **Extract**: Reads `<title>`, the meta description and the first `<h1>`.

pub mod extract;
pub mod handlers;
pub mod service;
pub mod types;
