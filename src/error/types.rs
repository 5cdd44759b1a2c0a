//! API error types
//!
//! Every error surfaces synchronously to the original caller as a status code
//! with a short plain-text body; nothing is retried and no partial response
//! is ever emitted. CORS headers are added by the wrapping middleware, so
//! they are present on these responses too.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::AnalyzerError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-POST request to the analyze endpoint
    #[error("only POST supported")]
    MethodNotAllowed,

    /// Request body could not be read off the wire
    #[error("failed to read request")]
    BodyRead,

    /// Request body was not valid AnalyzeRequest JSON
    #[error("invalid request body")]
    InvalidBody,

    /// Upstream analysis service failed; the variant says which leg broke
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

impl ApiError {
    /// Status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BodyRead | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Analyzer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body written to the caller
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => "only POST supported",
            ApiError::BodyRead => "failed to read request",
            ApiError::InvalidBody => "invalid request body",
            ApiError::Analyzer(AnalyzerError::Transport(_)) => "backend service call failed",
            ApiError::Analyzer(AnalyzerError::Decode(_)) => "failed to parse response",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status_mapping() {
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::BodyRead.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidBody.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_error_status_and_message() {
        let decode_err = serde_json::from_str::<crate::schemas::AnalyzeResponse>("not json")
            .unwrap_err();
        let err = ApiError::from(AnalyzerError::Decode(decode_err));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "failed to parse response");
    }

    #[test]
    fn test_message_matches_display_for_client_errors() {
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "only POST supported");
        assert_eq!(ApiError::InvalidBody.to_string(), "invalid request body");
    }
}
