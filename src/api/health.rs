//! Health check endpoint

use axum::Json;
use serde::Serialize;

/// Response for the health check endpoint
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint
///
/// Answers directly from the gateway with no dependency on the analysis
/// service. Registered for every method, so any request reaching it gets
/// `{"status":"healthy"}`.
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
