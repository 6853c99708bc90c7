//! Result Validation
//!
//! Schema checks for analysis results from either path:
//! - Remote payloads: `tokens` array shape, token field types, summary shape
//! - Local results: summary equals recomputed counts, positions present
//!
//! A remote summary that disagrees with its tokens is not an error. It is
//! kept as reported and flagged on [`ValidatedResult`].

use serde_json::{Map, Value};
use tracing::debug;

use crate::lexer::summarize;
use crate::types::{
    AnalysisResult, Summary, Token, TokenKind, ValidationError, ValidationErrorKind,
};

/// Validated remote result plus consistency flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResult {
    pub result: AnalysisResult,
    /// `false` when a supplied summary disagrees with the recomputed counts
    pub summary_consistent: bool,
}

/// Validator for analysis results
#[derive(Debug, Default, Clone, Copy)]
pub struct ResultValidator;

impl ResultValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a parsed remote payload
    pub fn validate(&self, candidate: &Value) -> Result<ValidatedResult, ValidationError> {
        let object = candidate.as_object().ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::Format,
                "Result must be a JSON object",
            )
        })?;

        let tokens = match object.get("tokens") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| self.validate_token(item, idx))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(ValidationError::new(
                    ValidationErrorKind::Format,
                    "'tokens' must be an array",
                )
                .with_field("tokens"));
            }
            None => return Err(ValidationError::missing_field("tokens")),
        };

        let recomputed = summarize(&tokens);
        let (summary, summary_consistent) = match object.get("summary") {
            None | Some(Value::Null) => (recomputed, true),
            Some(Value::Object(map)) => {
                let reported = self.validate_summary(map)?;
                let consistent = reported == recomputed;
                if !consistent {
                    debug!(?reported, ?recomputed, "Remote summary disagrees with tokens");
                }
                (reported, consistent)
            }
            Some(_) => {
                return Err(ValidationError::new(
                    ValidationErrorKind::Format,
                    "'summary' must be an object",
                )
                .with_field("summary"));
            }
        };

        Ok(ValidatedResult {
            result: AnalysisResult { tokens, summary },
            summary_consistent,
        })
    }

    /// Re-verify a locally produced result before handing it out
    pub fn check_local(&self, result: &AnalysisResult) -> Result<(), ValidationError> {
        if result.summary != summarize(&result.tokens) {
            return Err(ValidationError::new(
                ValidationErrorKind::Consistency,
                "summary does not match token counts",
            )
            .with_field("summary"));
        }

        if let Some(idx) = result
            .tokens
            .iter()
            .position(|t| t.line.is_none() || t.column.is_none() || t.lexeme.is_empty())
        {
            return Err(ValidationError::new(
                ValidationErrorKind::Consistency,
                "local token lacks a position or lexeme",
            )
            .with_field(format!("tokens[{}]", idx)));
        }

        Ok(())
    }

    fn validate_token(&self, item: &Value, idx: usize) -> Result<Token, ValidationError> {
        let location = format!("tokens[{}]", idx);
        let object = item.as_object().ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::Format, "token must be an object")
                .with_field(&location)
        })?;

        let kind = match object.get("type") {
            Some(Value::String(name)) if !name.trim().is_empty() => TokenKind::from_name(name),
            Some(_) => {
                return Err(ValidationError::new(
                    ValidationErrorKind::Format,
                    "'type' must be a non-empty string",
                )
                .with_field(format!("{}.type", location)));
            }
            None => return Err(ValidationError::missing_field(format!("{}.type", location))),
        };

        let lexeme = match object.get("value") {
            Some(Value::String(value)) => value.clone(),
            Some(_) => {
                return Err(ValidationError::new(
                    ValidationErrorKind::Format,
                    "'value' must be a string",
                )
                .with_field(format!("{}.value", location)));
            }
            None => return Err(ValidationError::missing_field(format!("{}.value", location))),
        };

        Ok(Token {
            kind,
            lexeme,
            line: self.position(object, "line", &location)?,
            column: self.position(object, "position", &location)?,
        })
    }

    /// Optional 1-based position field
    fn position(
        &self,
        object: &Map<String, Value>,
        key: &str,
        location: &str,
    ) -> Result<Option<usize>, ValidationError> {
        match object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_u64()
                .filter(|&n| n > 0)
                .and_then(|n| usize::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| {
                    ValidationError::new(
                        ValidationErrorKind::Format,
                        format!("'{}' must be a positive integer", key),
                    )
                    .with_field(format!("{}.{}", location, key))
                }),
        }
    }

    /// Summary keys are normalized the same way token kinds are, so
    /// `"Keyword"` and `"keyword"` count as the same entry
    fn validate_summary(&self, map: &Map<String, Value>) -> Result<Summary, ValidationError> {
        let mut summary = Summary::new();
        for (key, value) in map {
            let count = value
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| {
                    ValidationError::new(
                        ValidationErrorKind::Format,
                        "summary counts must be non-negative integers",
                    )
                    .with_field(format!("summary.{}", key))
                })?;
            let name = TokenKind::from_name(key).as_str().to_string();
            *summary.entry(name).or_insert(0) += count;
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{LanguageId, scan};
    use serde_json::json;

    #[test]
    fn test_valid_remote_result() {
        let payload = json!({
            "tokens": [
                {"type": "keyword", "value": "def", "line": 1, "position": 1},
                {"type": "Identifier", "value": "f", "line": 1, "position": 5}
            ],
            "summary": {"keyword": 1, "identifier": 1}
        });

        let validated = ResultValidator::new().validate(&payload).unwrap();
        assert!(validated.summary_consistent);
        assert_eq!(validated.result.tokens.len(), 2);
        assert_eq!(validated.result.tokens[1].kind, TokenKind::Identifier);
        assert_eq!(validated.result.tokens[1].column, Some(5));
    }

    #[test]
    fn test_missing_summary_is_recomputed() {
        let payload = json!({"tokens": [{"type": "number", "value": "1"}]});
        let validated = ResultValidator::new().validate(&payload).unwrap();
        assert!(validated.summary_consistent);
        assert_eq!(validated.result.summary.get("number"), Some(&1));
        assert_eq!(validated.result.tokens[0].line, None);
    }

    #[test]
    fn test_empty_tokens_accepted() {
        let validated = ResultValidator::new()
            .validate(&json!({"tokens": [], "summary": {}}))
            .unwrap();
        assert!(validated.result.tokens.is_empty());
        assert!(validated.summary_consistent);
    }

    #[test]
    fn test_mismatched_summary_kept_and_flagged() {
        let payload = json!({
            "tokens": [{"type": "keyword", "value": "if"}],
            "summary": {"keyword": 3, "operator": 1}
        });

        let validated = ResultValidator::new().validate(&payload).unwrap();
        assert!(!validated.summary_consistent);
        assert_eq!(validated.result.summary.get("keyword"), Some(&3));
        assert_eq!(validated.result.summary.get("operator"), Some(&1));
    }

    #[test]
    fn test_unknown_kind_preserved() {
        let payload = json!({
            "tokens": [{"type": "preprocessor", "value": "#include"}],
            "summary": {"preprocessor": 1}
        });

        let validated = ResultValidator::new().validate(&payload).unwrap();
        assert_eq!(
            validated.result.tokens[0].kind,
            TokenKind::Other("preprocessor".to_string())
        );
        assert!(validated.summary_consistent);
    }

    #[test]
    fn test_structural_failures() {
        let validator = ResultValidator::new();

        let err = validator.validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Format);

        let err = validator.validate(&json!({"summary": {}})).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.field.as_deref(), Some("tokens"));

        let err = validator.validate(&json!({"tokens": "none"})).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("tokens"));

        let err = validator
            .validate(&json!({"tokens": [{"value": "x"}]}))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("tokens[0].type"));

        let err = validator
            .validate(&json!({"tokens": [{"type": "keyword", "value": 7}]}))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("tokens[0].value"));

        let err = validator
            .validate(&json!({"tokens": [{"type": "keyword", "value": "x", "line": 0}]}))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("tokens[0].line"));

        let err = validator
            .validate(&json!({"tokens": [], "summary": {"keyword": -1}}))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("summary.keyword"));

        let err = validator
            .validate(&json!({"tokens": [], "summary": [1]}))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("summary"));
    }

    #[test]
    fn test_check_local() {
        let validator = ResultValidator::new();
        let result = scan("int x = 0;", LanguageId::C.profile());
        assert!(validator.check_local(&result).is_ok());

        let mut tampered = result.clone();
        tampered.summary.insert("keyword".to_string(), 9);
        let err = validator.check_local(&tampered).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Consistency);

        let unpositioned = AnalysisResult::from_tokens(vec![Token::unpositioned(
            TokenKind::Identifier,
            "x",
        )]);
        assert!(validator.check_local(&unpositioned).is_err());
    }
}
