//! Per-language profile tables.
//!
//! Each module provides a `spec()` function returning the raw rules the
//! registry turns into a `LanguageProfile`:
//! - Reserved keywords
//! - Comment markers
//! - Quote styles
//! - Operator spellings

pub mod c;
pub mod cpp;
pub mod java;
pub mod javascript;
pub mod python;

/// Punctuation shared by the C family and JavaScript
pub(crate) const C_FAMILY_PUNCTUATION: &[char] = &[';', ',', '.', ':', '\\'];

/// Operators shared by C, C++, Java and JavaScript
pub(crate) const C_FAMILY_OPERATORS: &[&str] = &[
    "=", "==", "!=", "<", ">", "<=", ">=", "+", "-", "*", "/", "%", "++", "--", "&&", "||",
    "!", "~", "&", "|", "^", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<=", ">>=", "?",
];
