//! Token Data Model
//!
//! Classified, positioned spans of source text and the aggregate result
//! returned by every analysis path.
//!
//! ## Wire Format
//!
//! Tokens serialize with the field names the remote gateway is asked to
//! produce (`type`, `value`, `line`, `position`), so a local result and a
//! remote result export to the same JSON shape.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-kind token counts, keyed by kind name.
///
/// Kinds absent from the token stream are absent from the map (never zero).
pub type Summary = BTreeMap<String, usize>;

// =============================================================================
// TokenKind
// =============================================================================

/// Token classification
///
/// The local scanner only ever produces the named variants. `Other` carries
/// kind names reported by the remote gateway that fall outside the closed
/// set; they are preserved verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Literal,
    Number,
    String,
    Comment,
    Punctuation,
    Delimiter,
    Whitespace,
    Error,
    Other(String),
}

impl TokenKind {
    /// Every kind of the closed set, in declaration order
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Literal,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Punctuation,
        TokenKind::Delimiter,
        TokenKind::Whitespace,
        TokenKind::Error,
    ];

    /// Canonical lowercase name used in summaries and JSON output
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Literal => "literal",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Error => "error",
            TokenKind::Other(name) => name,
        }
    }

    /// Resolve a kind name. Known names match case-insensitively; anything
    /// else becomes `Other` with the original spelling.
    pub fn from_name(name: &str) -> Self {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .find(|kind| kind.as_str() == lower)
            .cloned()
            .unwrap_or_else(|| TokenKind::Other(name.to_string()))
    }

    /// Whether this kind belongs to the closed set
    pub fn is_known(&self) -> bool {
        !matches!(self, TokenKind::Other(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TokenKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

// =============================================================================
// Token
// =============================================================================

/// A classified span of source text
///
/// `line` and `column` are 1-based. They are always present on locally
/// scanned tokens; remote tokens may omit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Exact matched text, byte-for-byte
    #[serde(rename = "value")]
    pub lexeme: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    #[serde(rename = "position", default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl Token {
    /// Create a positioned token
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Create a token without source position (remote or synthetic)
    pub fn unpositioned(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line: None,
            column: None,
        }
    }
}

// =============================================================================
// AnalysisResult
// =============================================================================

/// Ordered token stream plus per-kind counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub tokens: Vec<Token>,
    pub summary: Summary,
}

impl AnalysisResult {
    /// Build a result whose summary is derived from the tokens
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let summary = crate::lexer::summarize(&tokens);
        Self { tokens, summary }
    }

    /// Minimal result used when every analysis path has failed
    pub fn degraded(message: impl Into<String>) -> Self {
        Self::from_tokens(vec![Token::unpositioned(TokenKind::Error, message)])
    }

    /// Count for a single kind (zero when absent)
    pub fn count(&self, kind: &TokenKind) -> usize {
        self.summary.get(kind.as_str()).copied().unwrap_or(0)
    }

    /// Concatenated lexemes in token order
    pub fn reconstruct(&self) -> String {
        self.tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }
}
