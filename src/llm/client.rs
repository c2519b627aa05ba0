//! HTTP client for OpenAI-compatible chat completion APIs (Groq, OpenAI, Ollama)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::LlmConfig;
use crate::errors::InterviewRagError;
use crate::errors::Result;
use crate::llm::CompletionRequest;
use crate::llm::CompletionResponse;
use crate::llm::LlmClient;

/// Long-lived chat completion client; cheap to share behind an `Arc`
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenAiCompatibleClient {
    /// Create a new client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| InterviewRagError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    /// Create a client from the `[llm]` config section
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            Some(config.api_key.clone()),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatibleClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let url = self.completions_url();
        debug!("Calling chat completions API: {} (model: {})", url, request.model);

        let mut builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request);
        if let Some(api_key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| InterviewRagError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InterviewRagError::LlmError(format!(
                "LLM API error ({status}): {error_text}"
            )));
        }

        response
            .json::<CompletionResponse>()
            .await
            .map_err(|e| InterviewRagError::LlmError(format!("Failed to parse response: {e}")))
    }
}
