//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Propagation
//!
//! - **Precondition** errors (`UnknownLanguage`, `EmptyInput`, `Busy`) are
//!   surfaced to the caller before any work starts.
//! - **Fallback** errors (remote transport, malformed payload, timeout,
//!   validation) are absorbed by the orchestrator, which switches to the
//!   local scanner.
//! - Everything else (I/O, config) belongs to the outer CLI surface.

use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Structured validation error with context
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// What validation failed
    pub kind: ValidationErrorKind,
    /// Field or component that failed validation
    pub field: Option<String>,
    /// Detailed message
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Validation failed for '{}': {}", field, self.message)
        } else {
            write!(f, "Validation failed: {}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
        }
    }

    /// Add field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            ValidationErrorKind::MissingField,
            format!("required field '{}' is missing", field),
        )
        .with_field(field)
    }
}

/// Validation error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required field missing
    MissingField,
    /// Field present but of the wrong shape
    Format,
    /// Derived data disagrees with its source
    Consistency,
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum LexError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Preconditions
    // -------------------------------------------------------------------------
    #[error("Unknown language '{0}'. Supported: python, java, c, cpp, javascript")]
    UnknownLanguage(String),

    #[error("No source code supplied")]
    EmptyInput,

    #[error("An analysis is already in flight for this session")]
    Busy,

    // -------------------------------------------------------------------------
    // Remote Gateway Errors
    // -------------------------------------------------------------------------
    #[error("Remote analysis unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Malformed remote response: {0}")]
    MalformedRemoteResponse(String),

    /// Operation timeout with context
    #[error("Timeout after {duration:?}: {operation}")]
    Timeout {
        operation: String,
        duration: Duration,
    },

    #[error("{0}")]
    Validation(ValidationError),

    // -------------------------------------------------------------------------
    // Outer Surface
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),
}

impl From<ValidationError> for LexError {
    fn from(err: ValidationError) -> Self {
        LexError::Validation(err)
    }
}

pub type Result<T> = std::result::Result<T, LexError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl LexError {
    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Errors rejected before any network or scan work
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::UnknownLanguage(_) | Self::EmptyInput | Self::Busy)
    }

    /// Errors on the remote path that the orchestrator recovers from by
    /// switching to the local scanner
    pub fn should_fallback(&self) -> bool {
        matches!(
            self,
            Self::RemoteUnavailable(_)
                | Self::MalformedRemoteResponse(_)
                | Self::Timeout { .. }
                | Self::Validation(_)
                | Self::Json(_)
        )
    }

    /// Short label for log fields
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO",
            Self::Json(_) | Self::MalformedRemoteResponse(_) => "PARSE_ERROR",
            Self::UnknownLanguage(_) | Self::EmptyInput => "BAD_REQUEST",
            Self::Busy => "BUSY",
            Self::RemoteUnavailable(_) => "UNAVAILABLE",
            Self::Timeout { .. } => "TIMEOUT",
            Self::Validation(_) => "VALIDATION",
            Self::Config(_) => "CONFIG",
            Self::UnsupportedFile(_) => "UNSUPPORTED_FILE",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_errors() {
        assert!(LexError::EmptyInput.is_precondition());
        assert!(LexError::Busy.is_precondition());
        assert!(LexError::UnknownLanguage("ruby".into()).is_precondition());
        assert!(!LexError::RemoteUnavailable("down".into()).is_precondition());
    }

    #[test]
    fn test_fallback_errors() {
        assert!(LexError::RemoteUnavailable("HTTP 500".into()).should_fallback());
        assert!(LexError::MalformedRemoteResponse("bad".into()).should_fallback());
        assert!(LexError::timeout("remote analysis", Duration::from_secs(1)).should_fallback());
        assert!(LexError::from(ValidationError::missing_field("tokens")).should_fallback());
        assert!(!LexError::EmptyInput.should_fallback());
        assert!(!LexError::Config("x".into()).should_fallback());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::missing_field("tokens");
        assert_eq!(
            err.to_string(),
            "Validation failed for 'tokens': required field 'tokens' is missing"
        );

        let err = ValidationError::new(ValidationErrorKind::Format, "not an array");
        assert_eq!(err.to_string(), "Validation failed: not an array");
    }

    #[test]
    fn test_unknown_language_message() {
        let err = LexError::UnknownLanguage("ruby".into());
        assert!(err.to_string().contains("ruby"));
        assert!(err.to_string().contains("javascript"));
    }
}
