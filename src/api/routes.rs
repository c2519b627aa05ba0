//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers::AppState;
use super::handlers::{
    self,
};

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .route("/presets", get(handlers::list_presets))
        // RAG endpoints
        .route("/rag", post(handlers::rag_answer))
        .route("/rag/basic", post(handlers::rag_basic))
        .route("/rag/compare", post(handlers::rag_compare))
        .route("/rag/contextual", post(handlers::rag_contextual))
        .route("/rag/preset", post(handlers::rag_preset))
        .with_state(state)
}
