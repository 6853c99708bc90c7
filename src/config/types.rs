//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (`~/.config/lexiscan/`) and project (`.lexiscan/`) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{export, network, remote};
use crate::lexer::LanguageId;
use crate::types::{LexError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Remote analysis gateway settings
    pub remote: RemoteConfig,

    /// Analysis defaults
    pub analysis: AnalysisConfig,

    /// Result export settings
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            remote: RemoteConfig::default(),
            analysis: AnalysisConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `LexError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.remote.temperature) {
            return Err(LexError::Config(format!(
                "Remote temperature must be between 0.0 and 2.0, got {}",
                self.remote.temperature
            )));
        }

        if self.remote.timeout_secs == 0 {
            return Err(LexError::Config(
                "Remote timeout_secs must be greater than 0".to_string(),
            ));
        }

        let api_base = url::Url::parse(&self.remote.api_base).map_err(|e| {
            LexError::Config(format!(
                "Remote api_base '{}' is not a valid URL: {}",
                self.remote.api_base, e
            ))
        })?;
        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(LexError::Config(format!(
                "Remote api_base must use http or https, got '{}'",
                api_base.scheme()
            )));
        }

        if let Some(language) = &self.analysis.default_language {
            language.parse::<LanguageId>()?;
        }

        Ok(())
    }
}

// =============================================================================
// Remote Gateway Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Try the remote gateway before scanning locally
    pub enabled: bool,

    /// Provider name
    pub provider: String,

    /// Model name
    pub model: String,

    /// Chat completions endpoint base
    pub api_base: String,

    /// Bound on one remote call; expiry falls back to the local scanner
    pub timeout_secs: u64,

    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f32,

    /// API key. Never written back out; falls back to `OPENROUTER_API_KEY`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Attribution headers
    pub site_url: String,
    pub site_name: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: remote::DEFAULT_PROVIDER.to_string(),
            model: remote::DEFAULT_MODEL.to_string(),
            api_base: remote::DEFAULT_API_BASE.to_string(),
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            temperature: 0.0,
            api_key: None,
            site_url: remote::DEFAULT_SITE_URL.to_string(),
            site_name: remote::DEFAULT_SITE_NAME.to_string(),
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured key, or the provider's environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(remote::API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

// =============================================================================
// Analysis / Export
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Language used when `--language` is omitted
    pub default_language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported results are written to
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(export::DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert!(config.remote.enabled);
        assert_eq!(config.remote.provider, "openrouter");
        assert_eq!(config.remote.model, "openai/gpt-3.5-turbo");
        assert_eq!(config.remote.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.remote.temperature = 2.5;
        assert!(matches!(config.validate(), Err(LexError::Config(_))));

        let mut config = Config::default();
        config.remote.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(LexError::Config(_))));

        let mut config = Config::default();
        config.remote.api_base = "not a url".to_string();
        assert!(matches!(config.validate(), Err(LexError::Config(_))));

        let mut config = Config::default();
        config.remote.api_base = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(LexError::Config(_))));

        let mut config = Config::default();
        config.analysis.default_language = Some("ruby".to_string());
        assert!(matches!(
            config.validate(),
            Err(LexError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_api_key_never_serialized() {
        let mut config = Config::default();
        config.remote.api_key = Some("sk-secret".to_string());
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(!toml.contains("sk-secret"));
        assert!(!toml.contains("api_key"));
    }

    #[test]
    fn test_configured_api_key_wins() {
        let remote = RemoteConfig {
            api_key: Some("sk-config".to_string()),
            ..RemoteConfig::default()
        };
        assert_eq!(remote.resolve_api_key().as_deref(), Some("sk-config"));
    }
}
