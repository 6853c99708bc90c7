//! Languages Command
//!
//! Lists the supported language ids with their comment and string markers.

use serde::Serialize;

use crate::lexer::LanguageId;
use crate::types::Result;

/// Registry entry as shown to users
#[derive(Debug, Serialize)]
pub struct LanguageRow {
    pub id: &'static str,
    pub name: &'static str,
    pub line_comment: String,
    pub block_comment: Option<String>,
    pub block_strings: Vec<&'static str>,
    pub keywords: usize,
}

pub fn rows() -> Vec<LanguageRow> {
    LanguageId::ALL
        .iter()
        .map(|id| {
            let profile = id.profile();
            LanguageRow {
                id: id.as_str(),
                name: id.display_name(),
                line_comment: profile.line_comments.join(" "),
                block_comment: profile
                    .block_comment
                    .map(|(open, close)| format!("{} {}", open, close)),
                block_strings: profile.block_strings.to_vec(),
                keywords: profile.keyword_count(),
            }
        })
        .collect()
}

pub fn run(format: &str) -> Result<()> {
    let rows = rows();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<12} {:<12} {:<8} {:<8} {:<10} {}",
        "ID", "NAME", "LINE", "BLOCK", "STRINGS", "KEYWORDS"
    );
    for row in rows {
        println!(
            "{:<12} {:<12} {:<8} {:<8} {:<10} {}",
            row.id,
            row.name,
            row.line_comment,
            row.block_comment.as_deref().unwrap_or("-"),
            if row.block_strings.is_empty() {
                "-".to_string()
            } else {
                row.block_strings.join(" ")
            },
            row.keywords
        );
    }
    Ok(())
}
