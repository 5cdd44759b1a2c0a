//! Analysis service client
//!
//! This module handles communication with the WhisprGuard analysis service,
//! which performs the actual text analysis (sensitive-word detection, risk
//! scoring, rewrite suggestions). The gateway only relays JSON to and from it.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::config::AnalyzerConfig;
use crate::schemas::{AnalyzeRequest, AnalyzeResponse};

/// Errors that can occur when calling the analysis service
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The outbound call could not be completed: connection refused, DNS
    /// failure, timeout, or the response body could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but the body was not valid AnalyzeResponse JSON.
    #[error("failed to decode analysis response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the analysis service.
///
/// Holds a shared `reqwest::Client` (connection pool) plus the configured base
/// URL; cheap to clone and safe to share across concurrent requests. Nothing
/// here is mutated per-request.
#[derive(Debug, Clone)]
pub struct AnalyzerService {
    client: Client,
    base_url: String,
}

impl AnalyzerService {
    /// Create a new analysis service client
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        // Tolerate a configured base URL with a trailing slash
        let base_url = config.base_url.trim_end_matches('/').to_string();

        tracing::info!(
            base_url = %base_url,
            timeout_secs = config.timeout_seconds,
            "Initialized analyzer client"
        );

        Ok(Self { client, base_url })
    }

    /// Forward an analysis request and decode the service's answer.
    ///
    /// The request is relayed verbatim; the response status is not inspected,
    /// only whether the body decodes as an AnalyzeResponse. This is the single
    /// blocking operation in a request's lifetime and is bounded by the
    /// configured timeout.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, AnalyzerError> {
        let url = format!("{}/analyze", self.base_url);

        tracing::debug!(url = %url, model = %request.model, "Forwarding analyze request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(AnalyzerError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AnalyzerError::Transport)?;

        let analysis: AnalyzeResponse =
            serde_json::from_slice(&body).map_err(AnalyzerError::Decode)?;

        tracing::debug!(
            status = %status,
            risk_level = %analysis.risk_level,
            "Analysis service responded"
        );

        Ok(analysis)
    }

    /// Base URL this client was configured with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let service = AnalyzerService::new(&AnalyzerConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..AnalyzerConfig::default()
        })
        .unwrap();
        assert_eq!(service.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_decode_error_variant() {
        let err: AnalyzerError = serde_json::from_str::<AnalyzeResponse>("{").unwrap_err().into();
        assert!(matches!(err, AnalyzerError::Decode(_)));
    }
}
