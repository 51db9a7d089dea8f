//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Dirlens - directory lookup CLI
///
/// Resolve a user in an external directory and combine the user's company
/// and the global service status into one report.
///
/// Examples:
///   dirlens --user alice
///   dirlens --user alice --base-url http://directory.internal --format json
///   dirlens --user alice --format json --redact password,token
///   dirlens --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// User name to resolve in the directory
    #[arg(
        short,
        long,
        value_name = "NAME",
        required_unless_present = "init_config"
    )]
    pub user: Option<String>,

    /// Base URL of the directory service
    ///
    /// The service is expected to expose /users, /companies/{id}, and /status.
    /// Can also be set via DIRLENS_BASE_URL env var or .dirlens.toml config.
    #[arg(long, default_value = "http://localhost:8080", env = "DIRLENS_BASE_URL")]
    pub base_url: String,

    /// Output file path for the report (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .dirlens.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Keys to redact from the profile records (comma-separated)
    ///
    /// Example: --redact password,token. Applies to JSON output only.
    #[arg(long, value_name = "KEYS", value_delimiter = ',')]
    pub redact: Option<Vec<String>>,

    /// Generate a default .dirlens.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the user name, empty if not set (should be validated first).
    pub fn user_name(&self) -> &str {
        self.user.as_deref().unwrap_or("")
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Validate user name
        if self.user_name().trim().is_empty() {
            return Err("User name must not be empty".to_string());
        }

        // Validate base URL format
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("Base URL must start with 'http://' or 'https://'".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate timeout if provided
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        // Redaction only applies to the JSON rendering
        if self.redact.is_some() && self.format != OutputFormat::Json {
            return Err("--redact requires --format json".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
