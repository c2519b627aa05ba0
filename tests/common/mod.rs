//! Shared fakes for integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use interview_rag::config::PipelineConfig;
use interview_rag::llm::CompletionRequest;
use interview_rag::llm::CompletionResponse;
use interview_rag::llm::LlmClient;
use interview_rag::vector::RetrievedDocument;
use interview_rag::vector::VectorIndex;
use interview_rag::vector::VectorQuery;
use interview_rag::InterviewRagError;
use interview_rag::RagService;
use interview_rag::Result;

type Responder = dyn Fn(&CompletionRequest) -> Result<CompletionResponse> + Send + Sync;

/// True when the request carries the search query rewrite prompt
pub fn is_enhancement(request: &CompletionRequest) -> bool {
    request
        .messages
        .first()
        .is_some_and(|m| m.content.contains("improves search queries"))
}

/// LLM fake answering through a closure, recording every request
pub struct FakeLlm {
    responder: Box<Responder>,
    delay: Option<Duration>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeLlm {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<CompletionResponse> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Rewrites queries to `enhanced` and answers with `answer`
    pub fn answering(enhanced: &str, answer: &str) -> Self {
        let enhanced = enhanced.to_string();
        let answer = answer.to_string();
        Self::new(move |request| {
            if is_enhancement(request) {
                Ok(CompletionResponse::from_text(enhanced.clone()))
            } else {
                Ok(CompletionResponse::from_text(answer.clone()))
            }
        })
    }

    pub fn failing() -> Self {
        Self::new(|_| Err(InterviewRagError::LlmError("model overloaded".to_string())))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for FakeLlm {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.responder)(request)
    }
}

/// Vector index fake returning a fixed document set or a fixed error
pub struct FakeIndex {
    documents: Vec<RetrievedDocument>,
    error: Mutex<Option<String>>,
    fail_top_k: Option<usize>,
    delay: Option<Duration>,
    queries: Mutex<Vec<VectorQuery>>,
}

impl FakeIndex {
    pub fn with_documents(documents: Vec<RetrievedDocument>) -> Self {
        Self {
            documents,
            error: Mutex::new(None),
            fail_top_k: None,
            delay: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        let index = Self::with_documents(Vec::new());
        index.fail_with(Some(message));
        index
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Only fail queries asking for exactly `top_k` documents
    pub fn only_for_top_k(mut self, top_k: usize) -> Self {
        self.fail_top_k = Some(top_k);
        self
    }

    /// Switch between failing and succeeding between calls
    pub fn fail_with(&self, message: Option<&str>) {
        *self.error.lock().unwrap() = message.map(str::to_string);
    }

    pub fn queries(&self) -> Vec<VectorQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl VectorIndex for FakeIndex {
    async fn query(&self, query: &VectorQuery) -> Result<Vec<RetrievedDocument>> {
        self.queries.lock().unwrap().push(query.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let error = self
            .error
            .lock()
            .unwrap()
            .clone()
            .filter(|_| self.fail_top_k.map_or(true, |k| k == query.top_k));
        match error {
            Some(message) => Err(InterviewRagError::VectorSearchError(message)),
            None => Ok(self.documents.clone()),
        }
    }
}

/// The two-snippet profile used across scenarios
pub fn skills_documents() -> Vec<RetrievedDocument> {
    vec![
        RetrievedDocument::new("skills", 0.92, "Skills", "Go, Rust, distributed systems"),
        RetrievedDocument::new(
            "project-a",
            0.81,
            "Project A",
            "Built a scheduler serving 10k req/s",
        ),
    ]
}

pub const SKILLS_CONTEXT: &str =
    "Skills: Go, Rust, distributed systems\n\nProject A: Built a scheduler serving 10k req/s";

/// Five scored snippets, deliberately out of score order
pub fn profile_documents() -> Vec<RetrievedDocument> {
    vec![
        RetrievedDocument::new("edu", 0.40, "Education", "BSc Computer Science"),
        RetrievedDocument::new("skills", 0.95, "Skills", "Go, Rust, distributed systems"),
        RetrievedDocument::new("lead", 0.70, "Leadership", "Led a team of six engineers"),
        RetrievedDocument::new("proj", 0.85, "Project A", "Built a scheduler serving 10k req/s"),
        RetrievedDocument::new("oss", 0.55, "Open Source", "Maintainer of a tracing exporter"),
    ]
}

pub fn service(llm: Arc<FakeLlm>, index: Arc<FakeIndex>) -> RagService {
    RagService::from_clients(llm, index, PipelineConfig::default())
}

pub fn service_with_config(
    llm: Arc<FakeLlm>,
    index: Arc<FakeIndex>,
    config: PipelineConfig,
) -> RagService {
    RagService::from_clients(llm, index, config)
}
