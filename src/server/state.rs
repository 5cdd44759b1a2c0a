//! Application state container
//!
//! This module defines the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::Settings;
use crate::services::AnalyzerService;
use std::sync::Arc;

/// Shared application state
///
/// Holds the immutable settings and the analysis-service client. Cheaply
/// cloneable (via Arc) and thread-safe; nothing in it is mutated after
/// startup, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Client for the analysis service
    pub analyzer: Arc<AnalyzerService>,
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let settings = Arc::new(settings);

        tracing::debug!(
            backend_url = %settings.analyzer.base_url,
            "Initializing analyzer client"
        );
        let analyzer = Arc::new(AnalyzerService::new(&settings.analyzer)?);

        Ok(Self { settings, analyzer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_cheaply_cloneable() {
        let state = AppState::new(Settings::default()).unwrap();
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.settings, &clone.settings));
        assert!(Arc::ptr_eq(&state.analyzer, &clone.analyzer));
    }
}
