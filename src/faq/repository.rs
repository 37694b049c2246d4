use crate::search::types::Document;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const BUILTIN_FAQS: &str = include_str!("../../data/faqs.json");

/// Read access to the FAQ corpus.
///
/// `get_all` returns the full, ordered document set. Corpus order is the
/// tie-break order used by the ranker.
#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Document>>;
}

/// Parses a JSON array of documents, rejecting duplicate ids.
pub fn parse_documents(json: &str) -> Result<Vec<Document>> {
    let documents: Vec<Document> =
        serde_json::from_str(json).context("FAQ data is not a JSON array of documents")?;

    let mut seen = HashSet::new();
    for doc in &documents {
        if !seen.insert(doc.id) {
            bail!("duplicate document id {} in FAQ data", doc.id);
        }
    }

    Ok(documents)
}

/// Immutable in-memory corpus.
#[derive(Debug, Clone)]
pub struct StaticFaqRepository {
    documents: Arc<[Document]>,
}

impl StaticFaqRepository {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: documents.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_documents(json)?))
    }

    /// The FAQ corpus compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_FAQS).context("bundled FAQ corpus is invalid")
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl FaqRepository for StaticFaqRepository {
    async fn get_all(&self) -> Result<Vec<Document>> {
        Ok(self.documents.to_vec())
    }
}

/// Corpus backed by a JSON file, re-read on every call.
#[derive(Debug, Clone)]
pub struct FileFaqRepository {
    path: PathBuf,
}

impl FileFaqRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FaqRepository for FileFaqRepository {
    async fn get_all(&self) -> Result<Vec<Document>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read FAQ file {}", self.path.display()))?;

        parse_documents(&raw).with_context(|| format!("invalid FAQ file {}", self.path.display()))
    }
}
