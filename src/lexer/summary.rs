//! Summary Aggregator
//!
//! Per-kind token counts. Kinds that never occur are omitted rather than
//! reported as zero, on both the local and the remote path.

use crate::types::{Summary, Token};

/// Count tokens by kind name
pub fn summarize(tokens: &[Token]) -> Summary {
    tokens.iter().fold(Summary::new(), |mut summary, token| {
        *summary.entry(token.kind.as_str().to_string()).or_insert(0) += 1;
        summary
    })
}
