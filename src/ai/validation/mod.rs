//! Remote Response Validation
//!
//! Two steps stand between a remote completion and an `AnalysisResult`:
//! 1. [`extract_json_from_response`]: strip an optional code fence and parse
//! 2. [`ResultValidator`]: enforce the token/summary schema
//!
//! Failure at either step sends the orchestrator down the local path.

mod json_extract;
mod result;

pub use json_extract::{extract_json_from_response, strip_code_fence};
pub use result::{ResultValidator, ValidatedResult};
