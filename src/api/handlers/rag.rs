//! RAG-related API handlers
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;
use tracing::warn;

use super::AppState;
use crate::api::types::*;
use crate::models::ComparisonResult;
use crate::models::PipelineResult;

type EnvelopeError = (StatusCode, Json<ApiResponse<()>>);

fn invalid_question() -> EnvelopeError {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(INVALID_QUESTION)),
    )
}

fn rejected_body(rejection: &JsonRejection) -> EnvelopeError {
    warn!("Rejected request body: {}", rejection.body_text());
    invalid_question()
}

fn internal_error(e: &crate::InterviewRagError) -> EnvelopeError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(e.to_string())),
    )
}

/// Answer a question (POST /api/rag)
///
/// Runs the enhanced pipeline, falling back to basic retrieval; when both fail
/// the caller gets an apology answer with a 500 status.
pub async fn rag_answer(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, (StatusCode, Json<AnswerErrorResponse>)> {
    let bad_request = || {
        (
            StatusCode::BAD_REQUEST,
            Json(AnswerErrorResponse {
                error: INVALID_QUESTION.to_string(),
                answer: None,
            }),
        )
    };
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            return Err(bad_request());
        }
    };
    let Some(question) = validate_question(&req.question) else {
        return Err(bad_request());
    };
    info!("POST /api/rag: {}", question);

    match state.rag_service.ask(question).await {
        Ok(result) => Ok(Json(AnswerResponse {
            answer: result.response,
            metadata: result.metadata,
        })),
        Err(e) => {
            error!("RAG API error: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnswerErrorResponse {
                    error: e.to_string(),
                    answer: Some(APOLOGY_ANSWER.to_string()),
                }),
            ))
        }
    }
}

/// Plain retrieval (POST /api/rag/basic)
pub async fn rag_basic(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PipelineResult>>, EnvelopeError> {
    let Json(req) = payload.map_err(|e| rejected_body(&e))?;
    let question = validate_question(&req.question).ok_or_else(invalid_question)?;
    info!("POST /api/rag/basic: {}", question);

    state
        .rag_service
        .run_basic(question)
        .await
        .map(|result| Json(ApiResponse::success(result)))
        .map_err(|e| {
            error!("Error processing basic RAG query: {}", e);
            internal_error(&e)
        })
}

/// Basic vs enhanced comparison (POST /api/rag/compare)
pub async fn rag_compare(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ComparisonResult>>, EnvelopeError> {
    let Json(req) = payload.map_err(|e| rejected_body(&e))?;
    let question = validate_question(&req.question).ok_or_else(invalid_question)?;
    info!("POST /api/rag/compare: {}", question);

    state
        .rag_service
        .run_compare(question)
        .await
        .map(|result| Json(ApiResponse::success(result)))
        .map_err(|e| {
            error!("Error processing RAG comparison: {}", e);
            internal_error(&e)
        })
}

/// Interview-context decorated query (POST /api/rag/contextual)
pub async fn rag_contextual(
    State(state): State<AppState>,
    payload: Result<Json<ContextualRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PipelineResult>>, EnvelopeError> {
    let Json(req) = payload.map_err(|e| rejected_body(&e))?;
    let question = validate_question(&req.question).ok_or_else(invalid_question)?;
    info!(
        "POST /api/rag/contextual ({}): {}",
        req.context.interview_type, question
    );

    state
        .rag_service
        .run_contextual(question, &req.context)
        .await
        .map(|result| Json(ApiResponse::success(result)))
        .map_err(|e| {
            error!("Error processing contextual RAG query: {}", e);
            internal_error(&e)
        })
}

/// Preset-tuned query (POST /api/rag/preset)
pub async fn rag_preset(
    State(state): State<AppState>,
    payload: Result<Json<PresetRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PipelineResult>>, EnvelopeError> {
    let Json(req) = payload.map_err(|e| rejected_body(&e))?;
    let question = validate_question(&req.question).ok_or_else(invalid_question)?;
    info!("POST /api/rag/preset ({}): {}", req.preset, question);

    state
        .rag_service
        .run_with_preset(question, &req.preset)
        .await
        .map(|result| Json(ApiResponse::success(result)))
        .map_err(|e| {
            error!("Error processing preset RAG query: {}", e);
            internal_error(&e)
        })
}
