//! Vector similarity search interface

pub mod upstash;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

pub use upstash::UpstashVectorIndex;

use crate::errors::Result;

/// Similarity search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorQuery {
    /// Raw text; the index embeds it server-side
    pub data: String,
    pub top_k: usize,
    pub include_metadata: bool,
}

impl VectorQuery {
    pub fn new(data: impl Into<String>, top_k: usize) -> Self {
        Self {
            data: data.into(),
            top_k,
            include_metadata: true,
        }
    }
}

/// Profile snippet metadata stored alongside each vector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A scored match returned by the vector index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedDocument {
    #[serde(default)]
    pub id: String,
    pub score: f64,
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
}

impl RetrievedDocument {
    pub fn new(id: impl Into<String>, score: f64, title: &str, content: &str) -> Self {
        Self {
            id: id.into(),
            score,
            metadata: Some(DocumentMetadata {
                title: Some(title.to_string()),
                content: Some(content.to_string()),
            }),
        }
    }

    /// `title: content` line for the context block; `None` without metadata
    pub fn context_entry(&self) -> Option<String> {
        self.metadata.as_ref().map(|meta| {
            format!(
                "{}: {}",
                meta.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Context"),
                meta.content.as_deref().unwrap_or_default()
            )
        })
    }
}

/// Nearest-neighbour text search capability
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn query(&self, query: &VectorQuery) -> Result<Vec<RetrievedDocument>>;
}
