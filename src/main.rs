use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lexiscan::cli::commands::analyze::AnalyzeOptions;

#[derive(Parser)]
#[command(name = "lexiscan")]
#[command(
    version,
    about = "Lexical analyzer for Python, Java, C, C++ and JavaScript with LLM-backed analysis and local fallback"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a source file
    Analyze {
        #[arg(help = "Source file (.py .java .c .cpp .js .txt), or - for stdin")]
        file: PathBuf,
        #[arg(
            short,
            long,
            help = "Language: python, java, c, cpp, javascript (default: analysis.default_language)"
        )]
        language: Option<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
        #[arg(long, help = "Write the result as lexical-analysis-<language>-<date>.json")]
        export: bool,
        #[arg(long, requires = "export", help = "Export directory (default: export.output_dir)")]
        out_dir: Option<PathBuf>,
        #[arg(long, help = "Skip the remote gateway and scan locally")]
        local: bool,
    },

    /// List supported languages
    Languages {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mlexiscan encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    // Logs go to stderr so `--format json` output stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Analyze {
            file,
            language,
            format,
            export,
            out_dir,
            local,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(lexiscan::cli::commands::analyze::run(AnalyzeOptions {
                file,
                language,
                format,
                export,
                out_dir,
                local,
            }))?;
        }
        Commands::Languages { format } => {
            lexiscan::cli::commands::languages::run(&format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                lexiscan::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                lexiscan::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    lexiscan::cli::commands::config::init_global(force)?;
                } else {
                    lexiscan::cli::commands::config::init_project(force)?;
                }
            }
        },
    }

    Ok(())
}
