//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.dirlens.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Directory service settings.
    #[serde(default)]
    pub services: ServicesConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path (stdout when unset).
    #[serde(default)]
    pub output: Option<String>,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Directory service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Base URL of the directory service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Keys stripped from the profile records in JSON output.
    #[serde(default)]
    pub redact: Vec<String>,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".dirlens.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        // Base URL - always override since it has a default in the CLI
        self.services.base_url = args.base_url.clone();

        // Timeout - only override if explicitly provided via CLI
        if let Some(timeout) = args.timeout {
            self.services.timeout_seconds = timeout;
        }

        // Redact keys - only override if provided
        if let Some(ref redact) = args.redact {
            self.output.redact = redact.clone();
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.services.base_url, "http://localhost:8080");
        assert_eq!(config.services.timeout_seconds, 30);
        assert!(config.output.redact.is_empty());
        assert!(!config.general.verbose);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[services]
base_url = "https://directory.internal"
timeout_seconds = 5

[output]
redact = ["password", "token"]
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.services.base_url, "https://directory.internal");
        assert_eq!(config.services.timeout_seconds, 5);
        assert_eq!(config.output.redact, vec!["password", "token"]);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("[services]\nbase_url = \"http://10.0.0.1\"\n").unwrap();
        assert_eq!(config.services.base_url, "http://10.0.0.1");
        assert_eq!(config.services.timeout_seconds, 30);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[services]"));
        assert!(toml_str.contains("[output]"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dirlens.toml");
        std::fs::write(&path, "[services]\ntimeout_seconds = 3\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.services.timeout_seconds, 3);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(Config::load(&dir.path().join("absent.toml")).is_err());
    }
}
