//! JSON Extraction
//!
//! Pulls the JSON payload out of a remote completion. Models are asked for
//! raw JSON but often wrap it anyway:
//! - Markdown code fence (```json ... ``` or ``` ... ```)
//! - Surrounding whitespace or a byte-order mark
//!
//! Only the first fenced block is considered. No repair is attempted: a
//! payload that does not parse is rejected and the caller falls back.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

use crate::constants::remote::PREVIEW_CHARS;
use crate::types::{LexError, Result};

/// First fenced block, with an optional `json` tag after the opening fence
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("fence pattern is valid")
});

/// Text to parse: the first fenced block's content, else the whole response
pub fn strip_code_fence(content: &str) -> &str {
    let content = content.trim_start_matches('\u{feff}');
    match FENCED_BLOCK.captures(content).and_then(|c| c.get(1)) {
        Some(inner) if !inner.as_str().trim().is_empty() => inner.as_str().trim(),
        _ => content.trim(),
    }
}

/// Extract and parse JSON from a remote response
pub fn extract_json_from_response(content: &str) -> Result<Value> {
    let payload = strip_code_fence(content);
    serde_json::from_str::<Value>(payload).map_err(|e| {
        debug!(error = %e, "Remote payload is not valid JSON");
        LexError::MalformedRemoteResponse(format!(
            "{}. Content preview: {}...",
            e,
            payload.chars().take(PREVIEW_CHARS).collect::<String>()
        ))
    })
}
