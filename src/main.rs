//! Dirlens - directory lookup CLI
//!
//! Resolves a user in an external directory and combines the user's
//! company record and the global status record into one report.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (connection, config, service failure, etc.)
//!   2 - No user with the requested name

mod cli;
mod config;
mod directory;
mod models;
mod profile;
mod report;
mod transform;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::Config;
use directory::HttpDirectoryClient;
use indicatif::{ProgressBar, ProgressStyle};
use profile::AggregateError;
use report::{ProfileReport, ReportMetadata};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Dirlens v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the lookup
    match run_lookup(args).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Lookup failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .dirlens.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".dirlens.toml");

    if path.exists() {
        eprintln!("⚠️  .dirlens.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .dirlens.toml")?;

    println!("✅ Created .dirlens.toml with default settings.");
    println!("   Edit it to customize the service base URL, timeout, and redaction.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete lookup workflow. Returns exit code (0 or 2).
async fn run_lookup(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let user_name = args.user_name().to_string();

    if !args.quiet {
        println!(
            "🔎 Resolving user '{}' via {}",
            user_name, config.services.base_url
        );
    }

    let client = HttpDirectoryClient::new(
        config.services.base_url.clone(),
        config.services.timeout_seconds,
    );

    // Spinner while the service calls are in flight
    let spinner = (!args.quiet).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Fetching user, company, and status...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = profile::fetch_user_profile(&user_name, &client).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let profile = match result {
        Ok(profile) => profile,
        Err(AggregateError::UserNotFound { name }) => {
            eprintln!("\n⛔ No user named '{}' in the directory.", name);
            return Ok(2);
        }
        Err(AggregateError::Service(e)) => return Err(e.into()),
    };

    let duration = start_time.elapsed().as_secs_f64();

    // Build the report
    let report = ProfileReport {
        metadata: ReportMetadata {
            source: config.services.base_url.clone(),
            fetched_at: Utc::now(),
            duration_seconds: duration,
        },
        profile,
    };

    let output = match args.format {
        OutputFormat::Json => report::generate_json_report(&report, &config.output.redact)?,
        OutputFormat::Text => report::generate_text_report(&report),
    };

    // Write to file or print to stdout
    let output_path = args
        .output
        .clone()
        .or_else(|| config.general.output.clone().map(PathBuf::from));

    match output_path {
        Some(path) => {
            std::fs::write(&path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("\n✅ Lookup complete! Report saved to: {}", path.display());
        }
        None => {
            println!("\n{}", output);
        }
    }

    if !args.quiet {
        print_summary(&report, duration);
    }

    Ok(0)
}

/// Print the closing summary lines.
fn print_summary(report: &ProfileReport, duration: f64) {
    let company_label = report
        .profile
        .company
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", report.profile.company.id));

    let status_label = match report.profile.status.ok() {
        Some(true) => "ok",
        Some(false) => "not ok",
        None => "unknown",
    };

    println!("\n📊 Lookup Summary:");
    println!("   User: {}", report.profile.user.name);
    println!("   Company: {}", company_label);
    println!("   Status: {}", status_label);
    println!("   Duration: {:.1}s", duration);
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .dirlens.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
