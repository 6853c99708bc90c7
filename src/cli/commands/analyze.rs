//! Analyze Command
//!
//! Tokenizes one source file (or stdin) and prints the result.
//!
//! Usage:
//!   lexiscan analyze <FILE|-> --language <id> [--format text|json]
//!                    [--export [--out-dir DIR]] [--local]

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ai::provider::create_remote;
use crate::analysis::{Analyzer, export_result, read_source_file, to_pretty_json};
use crate::cli::ui::Output;
use crate::config::{Config, ConfigLoader};
use crate::lexer::LanguageId;
use crate::types::{LexError, Result};

/// Options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Source file, or `-` for stdin
    pub file: PathBuf,
    /// Falls back to `analysis.default_language`
    pub language: Option<String>,
    pub format: String,
    pub export: bool,
    /// Falls back to `export.output_dir`
    pub out_dir: Option<PathBuf>,
    /// Skip the remote gateway
    pub local: bool,
}

pub async fn run(options: AnalyzeOptions) -> Result<()> {
    let config = ConfigLoader::load()?;
    let language_id = resolve_language(options.language.as_deref(), &config)?;
    let source = read_input(&options.file)?;

    let analyzer = build_analyzer(&config, options.local)?;
    debug!(remote = analyzer.has_remote(), "Analyzer ready");

    let report = analyzer.analyze_detailed(&source, &language_id).await?;

    if options.format == "json" {
        println!("{}", to_pretty_json(&report.result)?);
    } else {
        Output::new().report(&report);
    }

    if options.export {
        let language: LanguageId = language_id.parse()?;
        let dir = options
            .out_dir
            .unwrap_or_else(|| config.export.output_dir.clone());
        let path = export_result(&report.result, language, &dir)?;
        // Keep stdout clean for JSON consumers
        if options.format == "json" {
            eprintln!("Exported: {}", path.display());
        } else {
            Output::new().success(&format!("Exported: {}", path.display()));
        }
    }

    Ok(())
}

/// Explicit `--language`, else the configured default
fn resolve_language(explicit: Option<&str>, config: &Config) -> Result<String> {
    explicit
        .map(str::to_string)
        .or_else(|| config.analysis.default_language.clone())
        .ok_or_else(|| {
            LexError::Config(
                "No language given. Pass --language <python|java|c|cpp|javascript> or set analysis.default_language"
                    .to_string(),
            )
        })
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        read_source_file(file)
    }
}

fn build_analyzer(config: &Config, local: bool) -> Result<Analyzer> {
    if local {
        return Ok(Analyzer::local_only());
    }
    let remote = create_remote(&config.remote)?;
    Ok(Analyzer::new(remote, config.remote.timeout()))
}
