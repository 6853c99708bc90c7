use console::style;

use crate::analysis::{AnalysisReport, ResultOrigin};
use crate::types::{AnalysisResult, Token};

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Token table, summary and provenance for one analysis
    pub fn report(&self, report: &AnalysisReport) {
        self.header("Lexical Analysis");
        match &report.origin {
            ResultOrigin::Remote(_) => self.info(&format!("Source: {}", report.origin)),
            ResultOrigin::Local => self.info("Source: local scanner"),
            ResultOrigin::Degraded => self.warning("Source: degraded result"),
        }
        if let Some(reason) = &report.fallback_reason {
            self.warning(&format!("Remote analysis unavailable: {}", reason));
        }
        if !report.summary_consistent {
            self.warning("Reported summary disagrees with the token list");
        }

        self.section("Tokens");
        println!("{}", style(format_token_header()).dim());
        for token in &report.result.tokens {
            println!("{}", format_token_row(token));
        }

        self.section("Summary");
        for line in format_summary(&report.result) {
            println!("{}", line);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Plain-text formatting
// =============================================================================

const KIND_WIDTH: usize = 12;
const POSITION_WIDTH: usize = 9;

pub fn format_token_header() -> String {
    format!(
        "{:<pw$} {:<kw$} {}",
        "LINE:COL",
        "TYPE",
        "VALUE",
        pw = POSITION_WIDTH,
        kw = KIND_WIDTH
    )
}

/// One table row. The lexeme is debug-quoted so whitespace stays visible.
pub fn format_token_row(token: &Token) -> String {
    let position = match (token.line, token.column) {
        (Some(line), Some(column)) => format!("{}:{}", line, column),
        (Some(line), None) => line.to_string(),
        _ => "-".to_string(),
    };
    format!(
        "{:<pw$} {:<kw$} {:?}",
        position,
        token.kind.as_str(),
        token.lexeme,
        pw = POSITION_WIDTH,
        kw = KIND_WIDTH
    )
}

/// `kind  count` lines in key order, then the total
pub fn format_summary(result: &AnalysisResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .summary
        .iter()
        .map(|(kind, count)| format!("{:<kw$} {:>6}", kind, count, kw = KIND_WIDTH))
        .collect();
    lines.push(format!(
        "{:<kw$} {:>6}",
        "total",
        result.tokens.len(),
        kw = KIND_WIDTH
    ));
    lines
}
