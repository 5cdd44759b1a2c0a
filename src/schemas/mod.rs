//! Wire-level request and response records

pub mod analyze;

pub use analyze::{AnalyzeRequest, AnalyzeResponse};
