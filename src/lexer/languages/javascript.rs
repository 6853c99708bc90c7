//! JavaScript language profile (ES2023 reserved words).

use super::{C_FAMILY_OPERATORS, C_FAMILY_PUNCTUATION};
use crate::lexer::profile::ProfileSpec;

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
    "function", "if", "import", "in", "instanceof", "let", "new", "null", "return", "static",
    "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while",
    "with", "yield",
];

const EXTRA_OPERATORS: &[&str] = &[
    "===", "!==", "**", "**=", ">>>", ">>>=", "&&=", "||=", "??", "??=", "?.", "=>", "...",
];

pub fn spec() -> ProfileSpec {
    ProfileSpec {
        keywords: KEYWORDS,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        block_strings: &[],
        // Template literals are lexed as single-line strings
        string_quotes: &['"', '\'', '`'],
        char_quotes: &[],
        operators: operators(),
        punctuation: C_FAMILY_PUNCTUATION,
        identifier_extras: &['$'],
    }
}

fn operators() -> &'static [&'static str] {
    static OPERATORS: std::sync::LazyLock<Vec<&'static str>> = std::sync::LazyLock::new(|| {
        C_FAMILY_OPERATORS
            .iter()
            .chain(EXTRA_OPERATORS)
            .copied()
            .collect()
    });
    &OPERATORS
}
