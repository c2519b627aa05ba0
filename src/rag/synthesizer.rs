//! Answer synthesis: turn retrieved snippets into a first-person interview answer

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use tracing::warn;

use crate::config::StageModelConfig;
use crate::llm::CompletionRequest;
use crate::llm::InterviewPrompts;
use crate::llm::LlmClient;
use crate::models::SynthesisPath;
use crate::presets::RagPreset;
use crate::rag::with_deadline;
use crate::rag::ContextAssembler;
use crate::vector::RetrievedDocument;

/// Placeholder answer when the model returns no content
pub const UNABLE_TO_GENERATE: &str = "Unable to generate response";

/// Outcome of answer synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Synthesis {
    /// Model-written answer
    Generated(String),
    /// The model answered with empty content
    Placeholder,
    /// Raw context block, used because the model call failed
    Fallback(String),
}

impl Synthesis {
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) | Self::Fallback(text) => text,
            Self::Placeholder => UNABLE_TO_GENERATE,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) | Self::Fallback(text) => text,
            Self::Placeholder => UNABLE_TO_GENERATE.to_string(),
        }
    }

    pub const fn path(&self) -> SynthesisPath {
        match self {
            Self::Generated(_) => SynthesisPath::Generated,
            Self::Placeholder => SynthesisPath::Placeholder,
            Self::Fallback(_) => SynthesisPath::Fallback,
        }
    }
}

/// LLM-backed interview answer writer
#[derive(Clone)]
pub struct AnswerSynthesizer {
    llm: Arc<dyn LlmClient>,
    params: StageModelConfig,
    candidate_name: String,
    deadline: Option<Duration>,
}

impl AnswerSynthesizer {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        params: StageModelConfig,
        candidate_name: impl Into<String>,
        deadline: Option<Duration>,
    ) -> Self {
        Self {
            llm,
            params,
            candidate_name: candidate_name.into(),
            deadline,
        }
    }

    /// Synthesize with the configured model parameters
    pub async fn format(&self, documents: &[RetrievedDocument], question: &str) -> Synthesis {
        self.format_with(documents, question, &self.params, None).await
    }

    /// Synthesize with explicit model parameters and optional preset guidance; never fails
    pub async fn format_with(
        &self,
        documents: &[RetrievedDocument],
        question: &str,
        params: &StageModelConfig,
        preset: Option<&RagPreset>,
    ) -> Synthesis {
        let context = ContextAssembler::assemble(documents);
        let prompt = InterviewPrompts::build_answer_prompt(
            question,
            &context,
            &self.candidate_name,
            preset,
        );
        debug!("Synthesizing answer from {} chars of context", context.len());

        let request = CompletionRequest::prompt(params.model.clone(), prompt)
            .with_temperature(params.temperature)
            .with_max_tokens(params.max_tokens);

        match with_deadline("response formatting", self.deadline, self.llm.complete(&request)).await {
            Ok(completion) => completion
                .text()
                .map_or(Synthesis::Placeholder, |text| Synthesis::Generated(text.to_string())),
            Err(e) => {
                warn!("Response formatting failed, returning raw context: {}", e);
                Synthesis::Fallback(context)
            }
        }
    }
}
