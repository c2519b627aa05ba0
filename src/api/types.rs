//! API request and response types

use serde::Deserialize;
use serde::Serialize;

use crate::models::InterviewContext;
use crate::models::InterviewType;
use crate::models::PipelineMetadata;
use crate::presets::RagPreset;

/// Message shown to end users when every pipeline attempt failed
pub const APOLOGY_ANSWER: &str =
    "I apologize, but I encountered an error processing your question. Please try again.";

/// Error text for a missing or blank question
pub const INVALID_QUESTION: &str = "Invalid question parameter";

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Named preset listing entry
#[derive(Debug, Serialize)]
pub struct PresetEntry {
    pub name: InterviewType,
    #[serde(flatten)]
    pub preset: &'static RagPreset,
}

/// Pull a usable question out of an untyped JSON field
///
/// Anything other than a non-blank string is rejected.
pub fn validate_question(value: &serde_json::Value) -> Option<&str> {
    value.as_str().filter(|q| !q.trim().is_empty())
}

/// Body carrying only a question
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub question: serde_json::Value,
}

/// Contextual pipeline request
#[derive(Debug, Deserialize)]
pub struct ContextualRequest {
    #[serde(default)]
    pub question: serde_json::Value,
    pub context: InterviewContext,
}

/// Preset pipeline request
#[derive(Debug, Deserialize)]
pub struct PresetRequest {
    #[serde(default)]
    pub question: serde_json::Value,
    #[serde(default = "default_preset")]
    pub preset: String,
}

fn default_preset() -> String {
    "general".to_string()
}

/// Answer returned by `POST /api/rag`
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub metadata: PipelineMetadata,
}

/// Error body returned by `POST /api/rag`
#[derive(Debug, Serialize)]
pub struct AnswerErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validate_question() {
        assert_eq!(validate_question(&json!("Why Rust?")), Some("Why Rust?"));
        assert_eq!(validate_question(&json!("   ")), None);
        assert_eq!(validate_question(&json!(42)), None);
        assert_eq!(validate_question(&serde_json::Value::Null), None);
    }

    #[test]
    fn test_preset_request_default() {
        let req: PresetRequest = serde_json::from_value(json!({"question": "Hi"})).unwrap();
        assert_eq!(req.preset, "general");
    }

    #[test]
    fn test_error_response_omits_missing_answer() {
        let body = serde_json::to_value(AnswerErrorResponse {
            error: INVALID_QUESTION.to_string(),
            answer: None,
        })
        .unwrap();
        assert_eq!(body, json!({"error": "Invalid question parameter"}));
    }
}
