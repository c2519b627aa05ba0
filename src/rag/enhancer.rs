//! Query enhancement: rewrite an interview question into a richer search query

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing::warn;

use crate::config::StageModelConfig;
use crate::llm::CompletionRequest;
use crate::llm::InterviewPrompts;
use crate::llm::LlmClient;
use crate::models::EnhancementPath;
use crate::rag::with_deadline;

/// Outcome of query enhancement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enhancement {
    /// The model produced a rewritten query
    Enhanced(String),
    /// The original question, used because the model call failed or returned nothing
    Fallback(String),
}

impl Enhancement {
    pub fn query(&self) -> &str {
        match self {
            Self::Enhanced(q) | Self::Fallback(q) => q,
        }
    }

    pub fn into_query(self) -> String {
        match self {
            Self::Enhanced(q) | Self::Fallback(q) => q,
        }
    }

    pub const fn path(&self) -> EnhancementPath {
        match self {
            Self::Enhanced(_) => EnhancementPath::Enhanced,
            Self::Fallback(_) => EnhancementPath::Fallback,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// LLM-backed search query rewriter
#[derive(Clone)]
pub struct QueryEnhancer {
    llm: Arc<dyn LlmClient>,
    params: StageModelConfig,
    deadline: Option<Duration>,
}

impl QueryEnhancer {
    pub fn new(llm: Arc<dyn LlmClient>, params: StageModelConfig, deadline: Option<Duration>) -> Self {
        Self {
            llm,
            params,
            deadline,
        }
    }

    /// Enhance with the configured model parameters
    pub async fn enhance(&self, question: &str) -> Enhancement {
        self.enhance_with(question, &self.params).await
    }

    /// Enhance with explicit model parameters; never fails
    pub async fn enhance_with(&self, question: &str, params: &StageModelConfig) -> Enhancement {
        let request = CompletionRequest::prompt(
            params.model.clone(),
            InterviewPrompts::build_enhancement_prompt(question),
        )
        .with_temperature(params.temperature)
        .with_max_tokens(params.max_tokens);

        let enhancement = match with_deadline("query enhancement", self.deadline, self.llm.complete(&request)).await {
            Ok(completion) => match completion.text() {
                Some(text) => Enhancement::Enhanced(text.to_string()),
                None => {
                    warn!("Query enhancement returned no content, using original query");
                    Enhancement::Fallback(question.to_string())
                }
            },
            Err(e) => {
                warn!("Query enhancement failed: {}", e);
                Enhancement::Fallback(question.to_string())
            }
        };

        info!(
            "Query Enhancement: \"{}\" → \"{}\"",
            question,
            enhancement.query()
        );
        enhancement
    }
}
