//! Language Profile Registry
//!
//! **Single source of truth** for per-language token classification rules.
//! Profiles are plain data: the scanner owns all behavior, so every profile
//! can be checked here without running a scan.
//!
//! ## Usage
//!
//! ```rust
//! use lexiscan::lexer::{LanguageId, profile_for};
//!
//! let profile = profile_for("python").unwrap();
//! assert_eq!(profile.language, LanguageId::Python);
//! assert!(profile.is_keyword("def"));
//! assert!(profile_for("ruby").is_err());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::languages;
use crate::types::{LexError, Result};

// =============================================================================
// Language Identifier
// =============================================================================

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    Java,
    C,
    Cpp,
    #[serde(rename = "javascript")]
    JavaScript,
}

impl LanguageId {
    /// All supported languages, in registry order
    pub const ALL: [LanguageId; 5] = [
        LanguageId::Python,
        LanguageId::Java,
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::JavaScript,
    ];

    /// Identifier accepted on every public surface
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
            LanguageId::JavaScript => "javascript",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Python => "Python",
            LanguageId::Java => "Java",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::JavaScript => "JavaScript",
        }
    }

    /// Registered profile for this language
    pub fn profile(&self) -> &'static LanguageProfile {
        &REGISTRY[self.index()]
    }

    fn index(&self) -> usize {
        match self {
            LanguageId::Python => 0,
            LanguageId::Java => 1,
            LanguageId::C => 2,
            LanguageId::Cpp => 3,
            LanguageId::JavaScript => 4,
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = LexError;

    /// Exact, case-sensitive match on the five supported identifiers
    fn from_str(s: &str) -> Result<Self> {
        LanguageId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| LexError::UnknownLanguage(s.to_string()))
    }
}

// =============================================================================
// Language Profile
// =============================================================================

/// Immutable classification rules for one language
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub language: LanguageId,
    /// Reserved words, matched case-sensitively against identifier-shaped lexemes
    keywords: HashSet<&'static str>,
    /// Single-line comment markers (`#`, `//`)
    pub line_comments: &'static [&'static str],
    /// Block comment open/close pair
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Delimiters of strings that may span lines (Python triple quotes)
    pub block_strings: &'static [&'static str],
    /// Quotes that open a `String` token
    pub string_quotes: &'static [char],
    /// Quotes that open a `Literal` token (character literals)
    pub char_quotes: &'static [char],
    /// Operator spellings, longest first
    operators: Vec<&'static str>,
    pub punctuation: &'static [char],
    pub delimiters: &'static [char],
    /// Characters besides `_` allowed in identifiers (`$`)
    pub identifier_extras: &'static [char],
}

/// Raw profile table entry, as written in `languages/*.rs`
pub struct ProfileSpec {
    pub keywords: &'static [&'static str],
    pub line_comments: &'static [&'static str],
    pub block_comment: Option<(&'static str, &'static str)>,
    pub block_strings: &'static [&'static str],
    pub string_quotes: &'static [char],
    pub char_quotes: &'static [char],
    pub operators: &'static [&'static str],
    pub punctuation: &'static [char],
    pub identifier_extras: &'static [char],
}

/// Bracket pairs shared by every supported language
pub const DELIMITERS: &[char] = &['(', ')', '[', ']', '{', '}'];

impl LanguageProfile {
    pub fn new(language: LanguageId, spec: ProfileSpec) -> Self {
        let mut operators = spec.operators.to_vec();
        operators.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        operators.dedup();

        Self {
            language,
            keywords: spec.keywords.iter().copied().collect(),
            line_comments: spec.line_comments,
            block_comment: spec.block_comment,
            block_strings: spec.block_strings,
            string_quotes: spec.string_quotes,
            char_quotes: spec.char_quotes,
            operators,
            punctuation: spec.punctuation,
            delimiters: DELIMITERS,
            identifier_extras: spec.identifier_extras,
        }
    }

    /// Exact, case-sensitive keyword check
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Operators ordered longest first, so the first prefix hit is the
    /// maximal munch
    pub fn operators(&self) -> &[&'static str] {
        &self.operators
    }

    pub fn has_block_strings(&self) -> bool {
        !self.block_strings.is_empty()
    }
}

// =============================================================================
// Registry
// =============================================================================

static REGISTRY: LazyLock<[LanguageProfile; 5]> = LazyLock::new(|| {
    [
        LanguageProfile::new(LanguageId::Python, languages::python::spec()),
        LanguageProfile::new(LanguageId::Java, languages::java::spec()),
        LanguageProfile::new(LanguageId::C, languages::c::spec()),
        LanguageProfile::new(LanguageId::Cpp, languages::cpp::spec()),
        LanguageProfile::new(LanguageId::JavaScript, languages::javascript::spec()),
    ]
});

/// Look up the profile for a language identifier.
///
/// Fails with `UnknownLanguage` for anything other than the five supported ids.
pub fn profile_for(language_id: &str) -> Result<&'static LanguageProfile> {
    let id: LanguageId = language_id.parse()?;
    Ok(id.profile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_id_parse() {
        assert_eq!("python".parse::<LanguageId>().unwrap(), LanguageId::Python);
        assert_eq!("cpp".parse::<LanguageId>().unwrap(), LanguageId::Cpp);
        assert_eq!(
            "javascript".parse::<LanguageId>().unwrap(),
            LanguageId::JavaScript
        );
    }

    #[test]
    fn test_unknown_language_rejected() {
        for bad in ["ruby", "", "Python", "js", "c++"] {
            let err = profile_for(bad).unwrap_err();
            assert!(matches!(err, LexError::UnknownLanguage(ref id) if id == bad));
        }
    }

    #[test]
    fn test_registry_order_matches_ids() {
        for id in LanguageId::ALL {
            assert_eq!(id.profile().language, id);
        }
    }

    #[test]
    fn test_comment_markers() {
        let python = LanguageId::Python.profile();
        assert_eq!(python.line_comments, &["#"]);
        assert_eq!(python.block_comment, None);

        for id in [LanguageId::Java, LanguageId::C, LanguageId::Cpp, LanguageId::JavaScript] {
            let profile = id.profile();
            assert_eq!(profile.line_comments, &["//"], "{}", id);
            assert_eq!(profile.block_comment, Some(("/*", "*/")), "{}", id);
        }
    }

    #[test]
    fn test_only_python_has_block_strings() {
        assert!(LanguageId::Python.profile().has_block_strings());
        for id in [LanguageId::Java, LanguageId::C, LanguageId::Cpp, LanguageId::JavaScript] {
            assert!(!id.profile().has_block_strings(), "{}", id);
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let python = LanguageId::Python.profile();
        assert!(python.is_keyword("True"));
        assert!(!python.is_keyword("true"));

        let c = LanguageId::C.profile();
        assert!(c.is_keyword("while"));
        assert!(!c.is_keyword("While"));
        assert!(!c.is_keyword("class"));
    }

    #[test]
    fn test_operators_sorted_longest_first() {
        for id in LanguageId::ALL {
            let ops = id.profile().operators();
            assert!(!ops.is_empty());
            for pair in ops.windows(2) {
                assert!(pair[0].len() >= pair[1].len(), "{}: {:?}", id, pair);
            }
        }
    }

    #[test]
    fn test_language_id_serde() {
        let json = serde_json::to_string(&LanguageId::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
        let back: LanguageId = serde_json::from_str("\"cpp\"").unwrap();
        assert_eq!(back, LanguageId::Cpp);
    }
}
