//! Complete RAG pipeline: Enhance -> Retrieve -> Synthesize

use std::sync::Arc;

use tokio::time::Instant;
use tracing::debug;
use tracing::info;
use tracing::info_span;
use tracing::warn;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::config::PipelineConfig;
use crate::config::StageModelConfig;
use crate::errors::Result;
use crate::llm::LlmClient;
use crate::llm::OpenAiCompatibleClient;
use crate::models::BranchResult;
use crate::models::ComparisonBranches;
use crate::models::ComparisonResult;
use crate::models::InterviewContext;
use crate::models::PipelineMetadata;
use crate::models::PipelineResult;
use crate::models::StageTiming;
use crate::presets;
use crate::presets::RagPreset;
use crate::rag::AnswerSynthesizer;
use crate::rag::ContextAssembler;
use crate::rag::QueryEnhancer;
use crate::rag::Retriever;
use crate::vector::UpstashVectorIndex;
use crate::vector::VectorIndex;

fn elapsed_ms(since: Instant) -> u64 {
    since.elapsed().as_millis() as u64
}

/// Complete RAG service
///
/// Holds read-only client handles, so one instance serves any number of
/// concurrent requests.
#[derive(Clone)]
pub struct RagService {
    enhancer: QueryEnhancer,
    retriever: Retriever,
    synthesizer: AnswerSynthesizer,
    config: PipelineConfig,
}

impl RagService {
    /// Create a new RAG service with HTTP clients built from configuration
    ///
    /// # Errors
    /// - Missing vector index URL
    /// - HTTP client build errors
    pub fn new(config: &AppConfig) -> Result<Self> {
        let llm: Arc<dyn LlmClient> = Arc::new(OpenAiCompatibleClient::from_config(&config.llm)?);
        let index: Arc<dyn VectorIndex> = Arc::new(UpstashVectorIndex::from_config(&config.vector)?);

        Ok(Self::from_clients(llm, index, config.pipeline.clone()))
    }

    /// Create from existing client handles
    #[must_use]
    pub fn from_clients(
        llm: Arc<dyn LlmClient>,
        index: Arc<dyn VectorIndex>,
        config: PipelineConfig,
    ) -> Self {
        let deadline = config.stage_timeout();
        let enhancer = QueryEnhancer::new(llm.clone(), config.enhancer.clone(), deadline);
        let retriever = Retriever::new(index, deadline);
        let synthesizer = AnswerSynthesizer::new(
            llm,
            config.synthesizer.clone(),
            config.candidate_name.clone(),
            deadline,
        );

        Self {
            enhancer,
            retriever,
            synthesizer,
            config,
        }
    }

    /// Enhanced pipeline: rewrite the query, retrieve, then synthesize an answer
    ///
    /// # Errors
    /// - Retrieval errors; enhancement and synthesis failures are absorbed
    pub async fn run_enhanced(&self, question: &str) -> Result<PipelineResult> {
        let span = info_span!("rag", mode = "enhanced", run_id = %Uuid::new_v4());
        self.enhanced_pipeline(
            question,
            &self.config.enhancer,
            &self.config.synthesizer,
            None,
        )
        .instrument(span)
        .await
    }

    /// Enhanced pipeline tuned by a scenario preset
    ///
    /// The preset picks both models, the synthesis temperature, and adds its
    /// focus areas and response style to the answer prompt. Unknown keys use
    /// the general preset.
    pub async fn run_with_preset(&self, question: &str, preset_key: &str) -> Result<PipelineResult> {
        let preset = presets::get_config(preset_key);
        let enhancer_params = StageModelConfig {
            model: preset.query_model.to_string(),
            ..self.config.enhancer.clone()
        };
        let synthesizer_params = StageModelConfig {
            model: preset.response_model.to_string(),
            temperature: preset.temperature,
            max_tokens: self.config.synthesizer.max_tokens,
        };

        let span = info_span!("rag", mode = "preset", preset = preset_key, run_id = %Uuid::new_v4());
        self.enhanced_pipeline(question, &enhancer_params, &synthesizer_params, Some(preset))
            .instrument(span)
            .await
    }

    async fn enhanced_pipeline(
        &self,
        question: &str,
        enhancer_params: &StageModelConfig,
        synthesizer_params: &StageModelConfig,
        preset: Option<&RagPreset>,
    ) -> Result<PipelineResult> {
        info!("Processing enhanced RAG query: {}", question);
        let start = Instant::now();

        // Step 1: Enhance the query for better vector search
        let enhance_start = Instant::now();
        let enhancement = self.enhancer.enhance_with(question, enhancer_params).await;
        let query_enhancement_ms = elapsed_ms(enhance_start);

        // Step 2: Vector search with the enhanced query
        let search_start = Instant::now();
        let documents = match self
            .retriever
            .search(enhancement.query(), self.config.enhanced_top_k)
            .await
        {
            Ok(documents) => documents,
            Err(e) => {
                warn!("Enhanced RAG query failed: {}", e);
                return Err(e);
            }
        };
        let vector_search_ms = elapsed_ms(search_start);

        // Step 3: Format results for interview context
        let format_start = Instant::now();
        let synthesis = self
            .synthesizer
            .format_with(&documents, question, synthesizer_params, preset)
            .await;
        let response_formatting_ms = elapsed_ms(format_start);

        let timing = StageTiming {
            query_enhancement_ms,
            vector_search_ms,
            response_formatting_ms,
            total_ms: elapsed_ms(start),
        };
        debug!("Stage timing: {:?}", timing);

        let enhancement_path = enhancement.path();
        let synthesis_path = synthesis.path();
        info!(
            "Enhanced RAG query completed in {}ms ({} results)",
            timing.total_ms,
            documents.len()
        );

        Ok(PipelineResult {
            success: true,
            response: synthesis.into_text(),
            metadata: PipelineMetadata {
                original_query: question.to_string(),
                enhanced_query: Some(enhancement.into_query()),
                results_found: documents.len(),
                timing: Some(timing),
                enhancement: Some(enhancement_path),
                synthesis: Some(synthesis_path),
            },
        })
    }

    /// Basic pipeline: retrieve on the raw question and return the context block verbatim
    ///
    /// # Errors
    /// - Retrieval errors
    pub async fn run_basic(&self, question: &str) -> Result<PipelineResult> {
        let span = info_span!("rag", mode = "basic", run_id = %Uuid::new_v4());
        async {
            info!("Processing basic RAG query: {}", question);

            let documents = match self
                .retriever
                .search(question, self.config.basic_top_k)
                .await
            {
                Ok(documents) => documents,
                Err(e) => {
                    warn!("Basic RAG query failed: {}", e);
                    return Err(e);
                }
            };

            Ok(PipelineResult {
                success: true,
                response: ContextAssembler::assemble(&documents),
                metadata: PipelineMetadata::basic(question, documents.len()),
            })
        }
        .instrument(span)
        .await
    }

    /// Run basic and enhanced concurrently; either failing fails the comparison
    ///
    /// # Errors
    /// - The first error raised by either branch
    pub async fn run_compare(&self, question: &str) -> Result<ComparisonResult> {
        let start = Instant::now();

        let (basic, enhanced) = match tokio::try_join!(self.run_basic(question), self.run_enhanced(question)) {
            Ok(results) => results,
            Err(e) => {
                warn!("Comparison failed: {}", e);
                return Err(e);
            }
        };

        Ok(ComparisonResult {
            question: question.to_string(),
            results: ComparisonBranches {
                basic: BranchResult::from(basic),
                enhanced: BranchResult::from(enhanced),
            },
            total_comparison_ms: elapsed_ms(start),
        })
    }

    /// Decorate the question with interview context, then run the enhanced pipeline
    ///
    /// # Errors
    /// - Retrieval errors
    pub async fn run_contextual(
        &self,
        question: &str,
        context: &InterviewContext,
    ) -> Result<PipelineResult> {
        let decorated = context.decorate(question);
        debug!("Contextual question:\n{}", decorated);
        self.run_enhanced(&decorated).await
    }

    /// Enhanced pipeline with basic retrieval as the fallback
    ///
    /// # Errors
    /// - The basic pipeline's error when both pipelines fail
    pub async fn ask(&self, question: &str) -> Result<PipelineResult> {
        match self.run_enhanced(question).await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!("Enhanced RAG failed, falling back to basic RAG: {}", e);
                self.run_basic(question).await
            }
        }
    }

    /// Get pipeline configuration
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get retriever reference
    #[must_use]
    pub const fn retriever(&self) -> &Retriever {
        &self.retriever
    }
}
