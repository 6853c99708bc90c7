//! C language profile (C11 keyword set).

use super::{C_FAMILY_OPERATORS, C_FAMILY_PUNCTUATION};
use crate::lexer::profile::ProfileSpec;

pub(crate) const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic",
    "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local",
];

/// Member access and preprocessor operators on top of the shared set
pub(crate) const EXTRA_OPERATORS: &[&str] = &["->", "#", "##", "..."];

pub fn spec() -> ProfileSpec {
    ProfileSpec {
        keywords: KEYWORDS,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        block_strings: &[],
        string_quotes: &['"'],
        char_quotes: &['\''],
        operators: operators(),
        punctuation: C_FAMILY_PUNCTUATION,
        identifier_extras: &[],
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
