//! Python language profile.

use crate::lexer::profile::ProfileSpec;

/// Reserved words (hard keywords only; soft keywords such as `match` stay identifiers)
const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "//", "%", "**", "@", "=", "==", "!=", "<", ">", "<=", ">=", "<<",
    ">>", "&", "|", "^", "~", "+=", "-=", "*=", "/=", "//=", "%=", "**=", "@=", "&=", "|=",
    "^=", "<<=", ">>=", ":=", "->",
];

pub fn spec() -> ProfileSpec {
    ProfileSpec {
        keywords: KEYWORDS,
        line_comments: &["#"],
        block_comment: None,
        block_strings: &["\"\"\"", "'''"],
        string_quotes: &['"', '\''],
        char_quotes: &[],
        operators: OPERATORS,
        punctuation: &[',', ';', '.', ':', '\\'],
        identifier_extras: &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_spec() {
        let spec = spec();
        assert!(spec.keywords.contains(&"def"));
        assert!(spec.keywords.contains(&"lambda"));
        assert!(!spec.keywords.contains(&"print"));
        assert!(spec.operators.contains(&"**="));
        assert!(spec.char_quotes.is_empty());
    }
}
