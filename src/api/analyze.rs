//! Analyze endpoint
//!
//! POST /analyze accepts an AnalyzeRequest, relays it to the analysis
//! service, and relays the service's AnalyzeResponse back to the caller.
//! The gateway never interprets the payload in either direction; each
//! request resolves fully within one parse → forward → relay cycle.

use axum::{
    body::to_bytes,
    extract::{Request, State},
    Json,
};

use crate::error::ApiError;
use crate::schemas::{AnalyzeRequest, AnalyzeResponse};
use crate::server::state::AppState;

/// POST /analyze - Relay a text-analysis request
///
/// Client-side failures (unreadable body, malformed JSON) are rejected
/// before the analysis service is contacted.
pub async fn analyze(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let body = to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "Failed to read request body");
            ApiError::BodyRead
        })?;

    let analyze_request: AnalyzeRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "Rejected malformed analyze request");
        ApiError::InvalidBody
    })?;

    let analysis = state
        .analyzer
        .analyze(&analyze_request)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Analysis service request failed");
            ApiError::from(err)
        })?;

    Ok(Json(analysis))
}

/// Fallback for non-POST methods on /analyze.
///
/// OPTIONS never reaches this point; the CORS layer answers it first.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
