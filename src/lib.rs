//! lexiscan - Multi-Language Lexical Analyzer
//!
//! Breaks Python, Java, C, C++ and JavaScript source into classified,
//! positioned tokens plus per-kind counts.
//!
//! ## Core Features
//!
//! - **Local Scanner**: Deterministic maximal-munch tokenizer with cross-line
//!   block comments and strings
//! - **Remote Analysis**: Optional LLM-backed tokenization via OpenRouter
//! - **Fallback Chain**: Any remote failure falls back to the local scanner
//! - **Single Flight**: One in-flight analysis per `Analyzer`
//!
//! ## Quick Start
//!
//! ```ignore
//! use lexiscan::{Analyzer, RemoteConfig, create_remote};
//!
//! let remote = create_remote(&RemoteConfig::default())?;
//! let analyzer = Analyzer::new(remote, Duration::from_secs(30));
//! let result = analyzer.analyze("x = 1 + 2 // note", "javascript").await?;
//! println!("{:?}", result.summary);
//! ```
//!
//! ## Modules
//!
//! - [`lexer`]: Language profiles, scanning engine, summary aggregator
//! - [`ai`]: Remote gateway, prompts, response validation
//! - [`analysis`]: Fallback orchestrator, file ingestion, export
//! - [`config`]: Layered configuration
//! - [`types`]: Tokens, results and errors

pub mod ai;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod lexer;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, RemoteConfig};

// Error Types
pub use types::{LexError, Result, ValidationError, ValidationErrorKind};

// Data Model
pub use types::{AnalysisResult, Summary, Token, TokenKind};

// =============================================================================
// Analysis Re-exports
// =============================================================================

pub use analysis::{AnalysisReport, Analyzer, ResultOrigin};
pub use lexer::{LanguageId, LanguageProfile, profile_for, scan, summarize};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    OpenRouterProvider, RemoteAnalyzer, ResultValidator, SharedRemote, ValidatedResult,
    create_remote, with_timeout,
};
