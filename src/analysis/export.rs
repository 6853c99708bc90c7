//! Result Export
//!
//! Writes an `AnalysisResult` as pretty-printed JSON named
//! `lexical-analysis-<language>-<YYYY-MM-DD>.json`.

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::export::FILE_PREFIX;
use crate::lexer::LanguageId;
use crate::types::{AnalysisResult, Result};

/// Export file name for a language on a given date
pub fn export_file_name(language: LanguageId, date: NaiveDate) -> String {
    format!(
        "{}-{}-{}.json",
        FILE_PREFIX,
        language,
        date.format("%Y-%m-%d")
    )
}

/// Pretty JSON in the export wire format
pub fn to_pretty_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write `result` into `dir` under today's export name, creating `dir` if
/// needed. An existing file with the same name is overwritten.
pub fn export_result(result: &AnalysisResult, language: LanguageId, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(language, Local::now().date_naive()));
    fs::write(&path, to_pretty_json(result)?)?;

    info!(path = %path.display(), tokens = result.tokens.len(), "Exported analysis result");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use tempfile::TempDir;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            export_file_name(LanguageId::Cpp, date),
            "lexical-analysis-cpp-2024-03-07.json"
        );
        assert_eq!(
            export_file_name(LanguageId::JavaScript, date),
            "lexical-analysis-javascript-2024-03-07.json"
        );
    }

    #[test]
    fn test_export_writes_pretty_json() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("out");
        let result = scan("x = 1", LanguageId::Python.profile());

        let path = export_result(&result, LanguageId::Python, &out_dir).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("lexical-analysis-python-"));
        assert!(name.ends_with(".json"));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"tokens\": ["));
        let back: AnalysisResult = serde_json::from_str(&written).unwrap();
        assert_eq!(back, result);
    }
}
