//! Remote Analysis Gateway
//!
//! Defines the `RemoteAnalyzer` trait: the "tokenize remotely" capability
//! the orchestrator tries before scanning locally. Implementations return the
//! assistant's raw message text; extraction and validation happen in
//! [`crate::ai::validation`], so every backend is held to the same checks.

mod openrouter;

pub use openrouter::OpenRouterProvider;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::RemoteConfig;
use crate::lexer::LanguageId;
use crate::types::{LexError, Result};

/// Shared remote backend, owned by an orchestrator
pub type SharedRemote = Arc<dyn RemoteAnalyzer>;

// =============================================================================
// Remote Analyzer Trait
// =============================================================================

#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    /// Ask the remote engine to tokenize `source`.
    ///
    /// Transport failures and non-2xx responses map to `RemoteUnavailable`;
    /// a response without message content maps to `MalformedRemoteResponse`.
    async fn analyze(&self, source: &str, language: LanguageId) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}

/// Create the configured remote backend.
///
/// Returns `Ok(None)` when the remote path is disabled or no API key is
/// available; the orchestrator then runs local-only.
pub fn create_remote(config: &RemoteConfig) -> Result<Option<SharedRemote>> {
    if !config.enabled {
        return Ok(None);
    }

    match config.provider.as_str() {
        "openrouter" => match config.resolve_api_key() {
            Some(key) => Ok(Some(Arc::new(OpenRouterProvider::new(config, key)?))),
            None => {
                tracing::info!("No OpenRouter API key configured; remote analysis disabled");
                Ok(None)
            }
        },
        other => Err(LexError::Config(format!(
            "Unknown provider: {}. Supported: openrouter",
            other
        ))),
    }
}
