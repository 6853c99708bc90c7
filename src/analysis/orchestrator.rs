//! Fallback Orchestrator
//!
//! Chooses between the remote gateway and the local scanner and always hands
//! back a usable `AnalysisResult` for well-formed input.
//!
//! ## Fallback Chain
//!
//! ```text
//! preconditions ──▶ remote (bounded) ──▶ extract JSON ──▶ validate ──▶ Remote
//!                        │ any failure
//!                        ▼
//!                   local scan ──▶ check ──▶ Local
//!                        │ check failed
//!                        ▼
//!                   single Error token ──▶ Degraded
//! ```
//!
//! ## Single Flight
//!
//! Each `Analyzer` admits one analysis at a time. A second call while one is
//! in flight fails fast with `LexError::Busy`. Dropping an in-flight future
//! cancels the remote request and releases the slot.
//!
//! ## Usage
//!
//! ```rust
//! use lexiscan::analysis::{Analyzer, ResultOrigin};
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let analyzer = Analyzer::local_only();
//! let report = rt.block_on(analyzer.analyze_detailed("x = 1", "python")).unwrap();
//! assert_eq!(report.origin, ResultOrigin::Local);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::ai::provider::SharedRemote;
use crate::ai::timeout::with_timeout;
use crate::ai::validation::{ResultValidator, extract_json_from_response};
use crate::constants::network;
use crate::lexer::{LanguageId, scan};
use crate::types::{AnalysisResult, LexError, Result};

/// Message carried by the single token of a degraded result
pub const DEGRADED_MESSAGE: &str = "Lexical analysis failed; no usable result was produced";

// =============================================================================
// Report Types
// =============================================================================

/// Which path produced a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultOrigin {
    /// Remote gateway, by provider name
    Remote(String),
    Local,
    Degraded,
}

impl std::fmt::Display for ResultOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultOrigin::Remote(name) => write!(f, "remote ({})", name),
            ResultOrigin::Local => write!(f, "local"),
            ResultOrigin::Degraded => write!(f, "degraded"),
        }
    }
}

/// Result plus provenance for observability
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub origin: ResultOrigin,
    /// `false` when the remote summary disagreed with its tokens
    pub summary_consistent: bool,
    /// Why the remote path was abandoned, if it was
    pub fallback_reason: Option<String>,
}

// =============================================================================
// Busy Flag
// =============================================================================

/// Holds the analyzer's single-flight slot; released on drop
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// =============================================================================
// Analyzer
// =============================================================================

/// Fallback orchestrator, one per caller session
pub struct Analyzer {
    remote: Option<SharedRemote>,
    timeout: Duration,
    validator: ResultValidator,
    busy: AtomicBool,
}

impl Analyzer {
    pub fn new(remote: Option<SharedRemote>, timeout: Duration) -> Self {
        Self {
            remote,
            timeout,
            validator: ResultValidator::new(),
            busy: AtomicBool::new(false),
        }
    }

    /// Analyzer that never leaves the process
    pub fn local_only() -> Self {
        Self::new(None, Duration::from_secs(network::DEFAULT_TIMEOUT_SECS))
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Whether an analysis is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Analyze `source` as `language_id`, returning only the result
    pub async fn analyze(&self, source: &str, language_id: &str) -> Result<AnalysisResult> {
        self.analyze_detailed(source, language_id)
            .await
            .map(|report| report.result)
    }

    /// Analyze `source` as `language_id`, returning result and provenance.
    ///
    /// Fails only on preconditions (`EmptyInput`, `UnknownLanguage`, `Busy`),
    /// all checked before any network or scan work.
    #[instrument(skip(self, source), fields(language = %language_id, bytes = source.len()))]
    pub async fn analyze_detailed(&self, source: &str, language_id: &str) -> Result<AnalysisReport> {
        if source.trim().is_empty() {
            return Err(LexError::EmptyInput);
        }
        let language: LanguageId = language_id.parse()?;

        let Some(_slot) = InFlight::acquire(&self.busy) else {
            warn!("Rejected analysis: another analysis is in flight");
            return Err(LexError::Busy);
        };

        let fallback_reason = match &self.remote {
            Some(remote) => match self.try_remote(remote, source, language).await {
                Ok(report) => return Ok(report),
                Err(e) => {
                    warn!(
                        provider = remote.name(),
                        category = e.category(),
                        error = %e,
                        "Remote analysis failed, falling back to local scan"
                    );
                    Some(e.to_string())
                }
            },
            None => {
                debug!("No remote gateway configured, scanning locally");
                None
            }
        };

        Ok(self.run_local(source, language, fallback_reason))
    }

    async fn try_remote(
        &self,
        remote: &SharedRemote,
        source: &str,
        language: LanguageId,
    ) -> Result<AnalysisReport> {
        debug!(provider = remote.name(), model = remote.model(), "Attempting remote analysis");

        let raw = with_timeout(
            self.timeout,
            remote.analyze(source, language),
            "remote analysis",
        )
        .await?;
        let value = extract_json_from_response(&raw)?;
        let validated = self.validator.validate(&value)?;

        if !validated.summary_consistent {
            warn!(
                provider = remote.name(),
                "Remote summary disagrees with its tokens; keeping the reported summary"
            );
        }
        info!(
            provider = remote.name(),
            tokens = validated.result.tokens.len(),
            "Remote analysis succeeded"
        );

        Ok(AnalysisReport {
            result: validated.result,
            origin: ResultOrigin::Remote(remote.name().to_string()),
            summary_consistent: validated.summary_consistent,
            fallback_reason: None,
        })
    }

    fn run_local(
        &self,
        source: &str,
        language: LanguageId,
        fallback_reason: Option<String>,
    ) -> AnalysisReport {
        let result = scan(source, language.profile());

        match self.validator.check_local(&result) {
            Ok(()) => {
                info!(tokens = result.tokens.len(), "Local analysis complete");
                AnalysisReport {
                    result,
                    origin: ResultOrigin::Local,
                    summary_consistent: true,
                    fallback_reason,
                }
            }
            Err(e) => {
                warn!(error = %e, "Local result failed validation, returning degraded result");
                Self::degraded(fallback_reason.or_else(|| Some(e.to_string())))
            }
        }
    }

    fn degraded(fallback_reason: Option<String>) -> AnalysisReport {
        AnalysisReport {
            result: AnalysisResult::degraded(DEGRADED_MESSAGE),
            origin: ResultOrigin::Degraded,
            summary_consistent: true,
            fallback_reason,
        }
    }
}
