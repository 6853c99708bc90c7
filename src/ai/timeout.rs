//! Timeout Helpers
//!
//! Bounds the remote analysis call. An expired timer surfaces as
//! `LexError::Timeout`, which the orchestrator treats like any other remote
//! failure and answers with a local scan.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::ai::timeout::with_timeout;
//!
//! let raw = with_timeout(
//!     Duration::from_secs(30),
//!     remote.analyze(source, language),
//!     "remote analysis",
//! ).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::types::{LexError, Result};

/// Execute an async operation with a timeout
///
/// Returns a timeout error if the operation doesn't complete within the specified duration.
/// The inner future is dropped on expiry, which cancels the in-flight request.
pub async fn with_timeout<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(LexError::timeout(operation_name, timeout)),
    }
}
