//! API request handlers
use std::sync::Arc;

use axum::Json;

use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::api::types::PresetEntry;
use crate::presets;
use crate::rag::RagService;

pub mod rag;

pub use rag::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub rag_service: Arc<RagService>,
}

impl AppState {
    pub fn new(rag_service: RagService) -> Self {
        Self {
            rag_service: Arc::new(rag_service),
        }
    }
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// List interview presets (GET /api/presets)
pub async fn list_presets() -> Json<ApiResponse<Vec<PresetEntry>>> {
    let entries = presets::all_presets()
        .into_iter()
        .map(|(name, preset)| PresetEntry { name, preset })
        .collect();
    Json(ApiResponse::success(entries))
}
