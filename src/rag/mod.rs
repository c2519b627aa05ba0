//! RAG (Retrieval-Augmented Generation) module
//!
//! This module turns an interview question into a first-person answer:
//! - Query enhancement with a small, low-temperature model
//! - Similarity search against the profile vector index
//! - Context assembly from retrieved snippets
//! - Answer synthesis with a larger model
//!
//! Enhancement and synthesis degrade to well-defined fallbacks; retrieval
//! failures always reach the caller.
//!
//! # Examples
//!
//! ```rust,no_run
//! use interview_rag::config::AppConfig;
//! use interview_rag::rag::RagService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let service = RagService::new(&config)?;
//!
//!     let result = service.run_enhanced("What are my key technical skills?").await?;
//!     println!("Answer: {}", result.response);
//!     println!("Sources: {} snippets", result.metadata.results_found);
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod enhancer;
pub mod pipeline;
pub mod retriever;
pub mod synthesizer;

use std::future::Future;
use std::time::Duration;

pub use context::ContextAssembler;
pub use enhancer::Enhancement;
pub use enhancer::QueryEnhancer;
pub use pipeline::RagService;
pub use retriever::Retriever;
pub use synthesizer::AnswerSynthesizer;
pub use synthesizer::Synthesis;
pub use synthesizer::UNABLE_TO_GENERATE;

use crate::errors::InterviewRagError;
use crate::errors::Result;

/// Await an external call, failing with [`InterviewRagError::Timeout`] past the deadline
pub(crate) async fn with_deadline<F, T>(
    stage: &'static str,
    deadline: Option<Duration>,
    call: F,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match deadline {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| InterviewRagError::Timeout {
                stage,
                timeout_ms: limit.as_millis() as u64,
            })?,
        None => call.await,
    }
}
