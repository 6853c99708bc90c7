//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/lexiscan/config.toml)
//! 3. Project config (.lexiscan/config.toml)
//! 4. Environment variables (LEXISCAN_* prefix, `__` between sections)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::constants::config as paths;
use crate::types::{LexError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        Self::load_with_project(&Self::project_config_path())
    }

    /// Same chain as [`ConfigLoader::load`], with an explicit project file
    pub fn load_with_project(project_path: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(project_path));
        }

        // LEXISCAN_REMOTE__TIMEOUT_SECS -> remote.timeout_secs
        figment = figment.merge(Env::prefixed(paths::ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| LexError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| LexError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/lexiscan/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join(paths::APP_DIR))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(paths::FILE_NAME))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        Self::project_dir().join(paths::FILE_NAME)
    }

    /// Get project configuration directory
    pub fn project_dir() -> PathBuf {
        PathBuf::from(paths::PROJECT_DIR)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Show current effective configuration
    pub fn show_config(as_json: bool) -> Result<()> {
        let config = Self::load()?;
        println!("{}", Self::render(&config, as_json)?);
        Ok(())
    }

    /// Render a configuration as pretty JSON or TOML
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| LexError::Config(e.to_string()))
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize global configuration
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            LexError::Config("Cannot determine global config directory".to_string())
        })?;
        Self::write_default(&global_dir, force)
    }

    /// Initialize project configuration under `base`
    pub fn init_project(base: &Path, force: bool) -> Result<PathBuf> {
        Self::write_default(&base.join(paths::PROJECT_DIR), force)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn write_default(dir: &Path, force: bool) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;

        let config_path = dir.join(paths::FILE_NAME);
        if !config_path.exists() || force {
            fs::write(&config_path, Self::default_config())?;
            info!("Created config: {}", config_path.display());
        } else {
            info!("Config exists: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Default config file content (TOML)
    fn default_config() -> String {
        r#"# lexiscan configuration
# Project settings in .lexiscan/config.toml override the global file.

version = "1.0"

# Remote analysis gateway (falls back to the local scanner on any failure)
[remote]
enabled = true
provider = "openrouter"
model = "openai/gpt-3.5-turbo"
api_base = "https://openrouter.ai/api/v1"
timeout_secs = 30
temperature = 0.0
# api_key = "..."   # or set OPENROUTER_API_KEY

[analysis]
# default_language = "python"

[export]
output_dir = "."
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_template_parses() {
        let temp_dir = TempDir::new().unwrap();
        let path = ConfigLoader::init_project(temp_dir.path(), false).unwrap();

        assert!(path.ends_with(".lexiscan/config.toml"));
        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.remote.timeout_secs, 30);
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = ConfigLoader::init_project(temp_dir.path(), false).unwrap();
        fs::write(&path, "version = \"2.0\"\n").unwrap();

        ConfigLoader::init_project(temp_dir.path(), false).unwrap();
        assert_eq!(ConfigLoader::load_from_file(&path).unwrap().version, "2.0");

        ConfigLoader::init_project(temp_dir.path(), true).unwrap();
        assert_eq!(ConfigLoader::load_from_file(&path).unwrap().version, "1.0");
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[remote]\nmodel = \"meta-llama/llama-3-8b\"\ntimeout_secs = 5\n\n[analysis]\ndefault_language = \"java\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_with_project(&path).unwrap();
        assert_eq!(config.remote.model, "meta-llama/llama-3-8b");
        assert_eq!(config.remote.timeout_secs, 5);
        assert_eq!(config.analysis.default_language.as_deref(), Some("java"));
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[remote]\ntimeout_secs = 0\n").unwrap();

        assert!(matches!(
            ConfigLoader::load_from_file(&path),
            Err(LexError::Config(_))
        ));
    }

    #[test]
    fn test_env_override() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        // SAFETY: This test runs in isolation
        unsafe {
            env::set_var("LEXISCAN_EXPORT__OUTPUT_DIR", "/tmp/lexiscan-out");
        }
        let config = ConfigLoader::load_with_project(&missing).unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("/tmp/lexiscan-out"));
        unsafe {
            env::remove_var("LEXISCAN_EXPORT__OUTPUT_DIR");
        }
    }

    #[test]
    fn test_render_formats() {
        let config = Config::default();
        let toml = ConfigLoader::render(&config, false).unwrap();
        assert!(toml.contains("[remote]"));
        let json = ConfigLoader::render(&config, true).unwrap();
        assert!(json.contains("\"timeout_secs\": 30"));
    }
}
