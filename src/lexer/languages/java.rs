//! Java language profile.

use super::{C_FAMILY_OPERATORS, C_FAMILY_PUNCTUATION};
use crate::lexer::profile::ProfileSpec;

/// Reserved keywords plus the literal words `true`, `false` and `null`
const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "var", "record", "yield", "sealed",
    "permits", "true", "false", "null",
];

const EXTRA_OPERATORS: &[&str] = &[">>>", ">>>=", "->", "::", "@", "..."];

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_spec() {
        let spec = spec();
        assert!(spec.keywords.contains(&"synchronized"));
        assert!(spec.operators.contains(&">>>="));
        assert!(spec.operators.contains(&"=="));
        assert_eq!(spec.char_quotes, &['\'']);
    }
}
