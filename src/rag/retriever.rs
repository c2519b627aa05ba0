//! Retrieval module for vector similarity search

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::errors::Result;
use crate::rag::with_deadline;
use crate::vector::RetrievedDocument;
use crate::vector::VectorIndex;
use crate::vector::VectorQuery;

/// Retriever over the profile vector index
#[derive(Clone)]
pub struct Retriever {
    index: Arc<dyn VectorIndex>,
    deadline: Option<Duration>,
}

impl Retriever {
    /// Create a new retriever
    pub fn new(index: Arc<dyn VectorIndex>, deadline: Option<Duration>) -> Self {
        Self { index, deadline }
    }

    /// Similarity search; results ordered by descending score, at most `top_k`
    ///
    /// # Errors
    /// - Vector index failures (network, auth, malformed responses)
    /// - Stage deadline exceeded
    pub async fn search(&self, query_text: &str, top_k: usize) -> Result<Vec<RetrievedDocument>> {
        debug!("Performing vector search (topK: {}): {}", top_k, query_text);

        let query = VectorQuery::new(query_text, top_k);
        let mut documents = with_deadline("vector search", self.deadline, self.index.query(&query)).await?;

        documents.sort_by(|a, b| b.score.total_cmp(&a.score));
        documents.truncate(top_k);

        debug!("Retrieved {} documents", documents.len());
        Ok(documents)
    }
}
