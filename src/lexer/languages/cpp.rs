//! C++ language profile (C++20 keyword set).

use super::C_FAMILY_PUNCTUATION;
use crate::lexer::profile::ProfileSpec;

const KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Scope, pointer-to-member and three-way comparison
const EXTRA_OPERATORS: &[&str] = &["::", "->*", ".*", "<=>"];

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
        super::C_FAMILY_OPERATORS
            .iter()
            .chain(super::c::EXTRA_OPERATORS)
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
    fn test_cpp_spec() {
        let spec = spec();
        assert!(spec.keywords.contains(&"namespace"));
        assert!(spec.keywords.contains(&"nullptr"));
        assert!(spec.operators.contains(&"::"));
        assert!(spec.operators.contains(&"<=>"));
        // Inherits the C member access operator
        assert!(spec.operators.contains(&"->"));
    }
}
