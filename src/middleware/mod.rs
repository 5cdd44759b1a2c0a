//! Middleware module
//!
//! Contains HTTP middleware for CORS handling and request logging.

pub mod cors;
pub mod logging;

// Re-export commonly used items
pub use cors::apply_cors;
pub use logging::{log_request, TraceId, REQUEST_ID_HEADER, TRACE_ID_HEADER};
