//! Application routing
//!
//! This module defines all HTTP routes for the application.

use axum::{
    middleware,
    routing::{any, post},
    Router,
};

use crate::api::{analyze, health};
use crate::middleware::{apply_cors, log_request};
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Only POST carries business logic; every other method lands on the
        // fallback (OPTIONS is consumed by the CORS layer before routing)
        .route(
            "/analyze",
            post(analyze::analyze).fallback(analyze::method_not_allowed),
        )
        // The health handler answers any method
        .route("/health", any(health::health_check))
        // Apply middleware layers (order matters: last added = outermost = runs first)
        // CORS must wrap the handlers so headers land on every code path
        .layer(middleware::from_fn(apply_cors))
        // Request logging with trace IDs, outermost so OPTIONS is logged too
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
