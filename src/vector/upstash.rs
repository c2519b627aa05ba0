//! Upstash Vector REST client (`/query-data` with server-side embedding)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::VectorConfig;
use crate::errors::InterviewRagError;
use crate::errors::Result;
use crate::vector::RetrievedDocument;
use crate::vector::VectorIndex;
use crate::vector::VectorQuery;

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Vec<RetrievedDocument>,
}

/// Vector index handle; cheap to share behind an `Arc`
#[derive(Clone)]
pub struct UpstashVectorIndex {
    client: Client,
    url: String,
    token: String,
}

impl UpstashVectorIndex {
    /// Create a new index client
    ///
    /// # Errors
    /// - Empty index URL
    /// - HTTP client build errors
    pub fn new(url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(InterviewRagError::ConfigError(
                "Vector index URL not provided".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| InterviewRagError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            url: url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Create a client from the `[vector]` config section
    pub fn from_config(config: &VectorConfig) -> Result<Self> {
        Self::new(
            config.url.clone(),
            config.token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }
}

#[async_trait]
impl VectorIndex for UpstashVectorIndex {
    async fn query(&self, query: &VectorQuery) -> Result<Vec<RetrievedDocument>> {
        let url = format!("{}/query-data", self.url);
        debug!("Querying vector index: {} (topK: {})", url, query.top_k);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(query)
            .send()
            .await
            .map_err(|e| InterviewRagError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InterviewRagError::VectorSearchError(format!(
                "Vector index error ({status}): {error_text}"
            )));
        }

        let body: QueryResponse = response.json().await.map_err(|e| {
            InterviewRagError::VectorSearchError(format!("Failed to parse response: {e}"))
        })?;

        Ok(body.result)
    }
}
