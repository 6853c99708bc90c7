//! Local File Ingestion
//!
//! Reads a source file for analysis. Only known source extensions are
//! accepted; the contents are handed over unmodified. The extension does not
//! select the language, the caller always names it.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::constants::ingest::SUPPORTED_EXTENSIONS;
use crate::types::{LexError, Result};

/// Whether `path` carries an accepted extension (case-insensitive)
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// Read a UTF-8 source file
pub fn read_source_file(path: &Path) -> Result<String> {
    if !is_supported(path) {
        return Err(LexError::UnsupportedFile(format!(
            "{} (accepted: {})",
            path.display(),
            SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect::<Vec<_>>()
                .join(" ")
        )));
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| {
        LexError::UnsupportedFile(format!("{} is not valid UTF-8", path.display()))
    })?;

    debug!(path = %path.display(), bytes = text.len(), "Read source file");
    Ok(text)
}
