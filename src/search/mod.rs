//! Search Service Module
//!
//! Keyword search over the FAQ corpus with an extractive summary of the best matches.
//!
//! ## Pipeline
//! query → **tokenizer** → terms → **ranker** (calls **scorer** per document)
//! → top results → **summarizer** → `SearchResponse`.
//!
//! ## Submodules
//! - **`tokenizer`**: Lowercases the query and splits it into terms.
//! - **`scorer`**: Literal, case-insensitive occurrence counting with title weighting.
//! - **`ranker`**: Drops non-matches, stable-sorts by score, keeps the top three.
//! - **`summarizer`**: Snippets and the sentence-based extractive summary.
//! - **`engine`**: Orchestrates the pipeline against a `FaqRepository`.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Documents, DTOs and the search error type.

pub mod engine;
pub mod handlers;
pub mod ranker;
pub mod scorer;
pub mod summarizer;
pub mod tokenizer;
pub mod types;
