//! HTTP server implementation

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::rag::RagService;
use crate::Result;

/// Build the application router with middleware layers
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .nest("/api", routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(
    rag_service: RagService,
    host: &str,
    port: u16,
    enable_cors: bool,
) -> Result<()> {
    info!("🚀 Starting interview-rag API server...");

    let app = build_router(AppState::new(rag_service), enable_cors);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /api/health          - Health check");
    info!("  GET  /api/presets         - Interview presets");
    info!("  POST /api/rag             - Enhanced answer with basic fallback");
    info!("  POST /api/rag/basic       - Plain retrieval");
    info!("  POST /api/rag/compare     - Basic vs enhanced comparison");
    info!("  POST /api/rag/contextual  - Answer with interview context");
    info!("  POST /api/rag/preset      - Answer tuned by a preset");

    axum::serve(listener, app).await?;

    Ok(())
}
