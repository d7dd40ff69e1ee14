//! Health check endpoints.

use axum::{extract::State, Json};
use payoff_core::PriceScan;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Price grid as reported by the health check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScanInfo {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub points: usize,
}

impl From<&PriceScan> for ScanInfo {
    fn from(scan: &PriceScan) -> Self {
        Self {
            start: scan.start,
            end: scan.end,
            step: scan.step,
            points: scan.len(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub scan: ScanInfo,
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is up", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        scan: ScanInfo::from(state.analyzer.scan()),
    })
}
