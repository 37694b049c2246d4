//! FAQ Corpus Module
//!
//! Supplies the documents that the search engine scores. The engine only ever
//! asks for "all documents", so repositories are free to load them from memory,
//! from the bundled corpus, or from a JSON file on disk.
//!
//! ## Submodules
//! - **`repository`**: The `FaqRepository` trait and its static and file-backed implementations.

pub mod repository;
