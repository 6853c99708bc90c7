//! Prompt Builder
//!
//! Standardized prompt construction for the remote analysis gateway.
//!
//! ## Usage
//!
//! ```rust
//! use lexiscan::ai::prompt::lexical_analysis_prompt;
//! use lexiscan::lexer::LanguageId;
//!
//! let prompt = lexical_analysis_prompt(LanguageId::Python, "x = 1");
//! assert!(prompt.contains("```python\nx = 1\n```"));
//! ```

use crate::lexer::LanguageId;
use crate::types::TokenKind;

/// System message sent with every analysis request
pub const SYSTEM_PROMPT: &str = "You are a lexical analyzer for programming languages. \
You analyze code and return only valid JSON without markdown formatting or code blocks.";

/// Appended to the final user message
pub const RAW_JSON_REMINDER: &str = "IMPORTANT: Return ONLY the raw JSON without any markdown \
formatting, code blocks, or backticks.";

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Free text paragraph
    Text(String),
    /// Numbered list
    Numbered(Vec<String>),
    /// Bulleted list
    Bullets(Vec<String>),
    /// Code block with language tag
    Code { language: String, content: String },
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.sections.push(PromptSection::Text(content.into()));
        self
    }

    pub fn numbered<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.push(PromptSection::Numbered(
            items.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.push(PromptSection::Bullets(
            items.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Add a fenced code block. The content is embedded verbatim.
    pub fn code(mut self, language: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Code {
            language: language.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Text(content) => {
                    prompt.push_str(&content);
                    prompt.push_str("\n\n");
                }
                PromptSection::Numbered(items) => {
                    for (i, item) in items.iter().enumerate() {
                        prompt.push_str(&format!("{}. {}\n", i + 1, item));
                    }
                    prompt.push('\n');
                }
                PromptSection::Bullets(items) => {
                    for item in items {
                        prompt.push_str(&format!("- {}\n", item));
                    }
                    prompt.push('\n');
                }
                PromptSection::Code { language, content } => {
                    prompt.push_str(&format!("```{}\n", language));
                    prompt.push_str(&content);
                    if !content.ends_with('\n') {
                        prompt.push('\n');
                    }
                    prompt.push_str("```\n\n");
                }
            }
        }

        prompt.trim_end().to_string()
    }
}

/// Category descriptions offered to the remote engine
fn category_hints() -> Vec<String> {
    TokenKind::ALL
        .iter()
        .filter(|kind| **kind != TokenKind::Error)
        .map(|kind| {
            let hint = match kind {
                TokenKind::Keyword => "language keywords",
                TokenKind::Identifier => "variable names, function names, etc.",
                TokenKind::Operator => "arithmetic, logical, etc.",
                TokenKind::Literal => "character literals and other non-numeric literals",
                TokenKind::Number => "integer, float, etc.",
                TokenKind::String => "string literals",
                TokenKind::Comment => "single line, multi-line",
                TokenKind::Punctuation => "semicolons, commas, etc.",
                TokenKind::Delimiter => "parentheses, brackets, braces",
                _ => "spaces, tabs, newlines",
            };
            format!("{} ({})", kind, hint)
        })
        .collect()
}

/// User message for one analysis request
pub fn lexical_analysis_prompt(language: LanguageId, source: &str) -> String {
    PromptBuilder::new()
        .text(format!(
            "You are a lexical analyzer for programming languages. Analyze the following {} code and identify all lexical tokens.\nReturn ONLY a JSON object with two properties:",
            language
        ))
        .numbered([
            "\"tokens\": an array of token objects, each with \"type\", \"value\", \"line\", and \"position\" properties",
            "\"summary\": an object with token types as keys and their counts as values",
        ])
        .text("For token types, use these categories:")
        .bullets(category_hints())
        .text("Here's the code to analyze:")
        .code(language.as_str(), source)
        .text("Respond ONLY with the JSON object, no explanations or other text.")
        .text(RAW_JSON_REMINDER)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sections() {
        let prompt = PromptBuilder::new()
            .text("Intro")
            .numbered(["one", "two"])
            .bullets(["a"])
            .code("c", "int x;")
            .build();

        assert_eq!(prompt, "Intro\n\n1. one\n2. two\n\n- a\n\n```c\nint x;\n```");
    }

    #[test]
    fn test_analysis_prompt_embeds_language_and_source() {
        let source = "function f() {\n  return 1;\n}\n";
        let prompt = lexical_analysis_prompt(LanguageId::JavaScript, source);

        assert!(prompt.contains("Analyze the following javascript code"));
        assert!(prompt.contains("```javascript\nfunction f() {\n  return 1;\n}\n```"));
        assert!(prompt.contains("\"type\", \"value\", \"line\", and \"position\""));
        assert!(prompt.contains("- whitespace (spaces, tabs, newlines)"));
        assert!(!prompt.contains("- error"));
        assert!(prompt.ends_with(RAW_JSON_REMINDER));
    }
}
