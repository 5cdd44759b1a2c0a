//! Services module
//!
//! Contains clients for external collaborator services.

pub mod analyzer;

pub use analyzer::{AnalyzerError, AnalyzerService};
