//! AI Integration Layer
//!
//! Remote (LLM-backed) lexical analysis: the gateway abstraction, request
//! prompts, the timeout bound and response validation.

pub mod prompt;
pub mod provider;
pub mod timeout;
pub mod validation;

pub use prompt::{PromptBuilder, PromptSection, lexical_analysis_prompt};
pub use provider::{OpenRouterProvider, RemoteAnalyzer, SharedRemote, create_remote};
pub use timeout::with_timeout;
pub use validation::{ResultValidator, ValidatedResult, extract_json_from_response};
