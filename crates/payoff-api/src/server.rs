//! Server configuration and startup.

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::dto::{AnalysisResponse, ContractRequest, XyValue};
use crate::error::ErrorResponse;
use crate::routes;
use crate::routes::health::{HealthResponse, ScanInfo};
use crate::state::AppState;

/// OpenAPI document for the server.
#[derive(OpenApi)]
#[openapi(
    info(title = "Payoff API", description = "Options payoff analysis"),
    paths(routes::analyze::analyze, routes::health::health_check),
    components(schemas(
        ContractRequest,
        AnalysisResponse,
        XyValue,
        ErrorResponse,
        HealthResponse,
        ScanInfo
    ))
)]
pub struct ApiDoc;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // Analysis
        .route("/analyze", post(routes::analyze::analyze))
        // Docs
        .route("/openapi.json", get(openapi_json))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Run the server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Payoff API Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /analyze");
    tracing::info!("  GET  /openapi.json");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server can only be killed.
        tracing::error!("Failed to install CTRL+C handler: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
