use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::InterviewRagError;

/// Interview scenario category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Technical,
    Behavioral,
    Executive,
    General,
}

impl InterviewType {
    pub const ALL: [Self; 4] = [
        Self::Technical,
        Self::Behavioral,
        Self::Executive,
        Self::General,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::Executive => "executive",
            Self::General => "general",
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewType {
    type Err = InterviewRagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "technical" => Ok(Self::Technical),
            "behavioral" => Ok(Self::Behavioral),
            "executive" => Ok(Self::Executive),
            "general" => Ok(Self::General),
            other => Err(InterviewRagError::Custom(format!(
                "Unknown interview type '{other}' (expected technical, behavioral, executive or general)"
            ))),
        }
    }
}

/// Interview metadata used to decorate a question before running the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewContext {
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_requirements: Option<Vec<String>>,
}

impl InterviewContext {
    pub const fn new(interview_type: InterviewType) -> Self {
        Self {
            interview_type,
            company_info: None,
            job_requirements: None,
        }
    }

    #[must_use]
    pub fn with_company(mut self, company_info: impl Into<String>) -> Self {
        self.company_info = Some(company_info.into());
        self
    }

    #[must_use]
    pub fn with_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.job_requirements = Some(requirements.into_iter().map(Into::into).collect());
        self
    }

    /// Prepend the interview header to a question
    ///
    /// Blank company info is left out of the header. An explicitly empty
    /// requirement list also drops the line instead of rendering a bare
    /// `Key Requirements: ` with nothing after it.
    pub fn decorate(&self, question: &str) -> String {
        let mut text = format!(
            "Context: This is a {} interview question.\n",
            self.interview_type
        );

        if let Some(company) = self.company_info.as_deref().filter(|c| !c.trim().is_empty()) {
            text.push_str(&format!("Company: {company}\n"));
        }
        if let Some(requirements) = self.job_requirements.as_ref().filter(|r| !r.is_empty()) {
            text.push_str(&format!("Key Requirements: {}\n", requirements.join(", ")));
        }

        text.push_str(&format!("\nQuestion: {question}"));
        text
    }
}

/// Which path the query enhancement stage took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhancementPath {
    Enhanced,
    Fallback,
}

/// Which path the answer synthesis stage took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisPath {
    Generated,
    Placeholder,
    Fallback,
}

/// Wall-clock duration of each enhanced-pipeline stage, in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub query_enhancement_ms: u64,
    pub vector_search_ms: u64,
    pub response_formatting_ms: u64,
    pub total_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineMetadata {
    pub original_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_query: Option<String>,
    pub results_found: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<StageTiming>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<EnhancementPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<SynthesisPath>,
}

impl PipelineMetadata {
    /// Metadata for a plain retrieval run
    pub fn basic(original_query: impl Into<String>, results_found: usize) -> Self {
        Self {
            original_query: original_query.into(),
            enhanced_query: None,
            results_found,
            timing: None,
            enhancement: None,
            synthesis: None,
        }
    }
}

/// Outcome of a single pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub success: bool,
    pub response: String,
    pub metadata: PipelineMetadata,
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchResult {
    pub response: String,
    pub metadata: PipelineMetadata,
}

impl From<PipelineResult> for BranchResult {
    fn from(result: PipelineResult) -> Self {
        Self {
            response: result.response,
            metadata: result.metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonBranches {
    pub basic: BranchResult,
    pub enhanced: BranchResult,
}

/// Basic and enhanced answers to the same question, produced concurrently
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub question: String,
    pub results: ComparisonBranches,
    pub total_comparison_ms: u64,
}
