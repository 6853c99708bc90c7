//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Network settings for the remote analysis gateway
pub mod network {
    /// Upper bound on one remote analysis call (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Connection timeout (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 10;
}

/// Remote analysis gateway defaults
pub mod remote {
    pub const DEFAULT_PROVIDER: &str = "openrouter";

    pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

    pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";

    /// Sent as `HTTP-Referer` for gateway attribution
    pub const DEFAULT_SITE_URL: &str = "https://lexical-analyzer.vercel.app";

    /// Sent as `X-Title` for gateway attribution
    pub const DEFAULT_SITE_NAME: &str = "Universal Lexical Analyzer";

    /// Environment variable consulted when no key is configured
    pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

    /// Characters of a rejected payload kept in log and error messages
    pub const PREVIEW_CHARS: usize = 200;
}

/// Result export
pub mod export {
    /// Exported file names are `<prefix>-<language>-<YYYY-MM-DD>.json`
    pub const FILE_PREFIX: &str = "lexical-analysis";

    pub const DEFAULT_OUTPUT_DIR: &str = ".";
}

/// Local file ingestion
pub mod ingest {
    /// Accepted source file extensions (without the dot)
    pub const SUPPORTED_EXTENSIONS: &[&str] = &["py", "java", "c", "cpp", "js", "txt"];
}

/// Configuration file locations
pub mod config {
    /// Environment variable prefix (`LEXISCAN_REMOTE__MODEL` -> `remote.model`)
    pub const ENV_PREFIX: &str = "LEXISCAN_";

    /// Directory name under `$XDG_CONFIG_HOME` and in the project root
    pub const APP_DIR: &str = "lexiscan";

    pub const PROJECT_DIR: &str = ".lexiscan";

    pub const FILE_NAME: &str = "config.toml";
}
