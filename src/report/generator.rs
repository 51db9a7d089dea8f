//! Text and JSON report generation.
//!
//! Renders one resolved profile together with lookup metadata.

use crate::models::UserProfile;
use crate::transform;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata about one lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Base URL the records were fetched from.
    pub source: String,
    /// Date and time of the lookup.
    pub fetched_at: DateTime<Utc>,
    /// Duration of the lookup in seconds.
    pub duration_seconds: f64,
}

/// The complete lookup report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Metadata about the lookup.
    pub metadata: ReportMetadata,
    /// The aggregated profile.
    pub profile: UserProfile,
}

/// Generate the pretty JSON report.
///
/// When `redact` keys are given they are stripped from the profile's
/// user, company, and status records before rendering.
pub fn generate_json_report(report: &ProfileReport, redact: &[String]) -> Result<String> {
    let mut value = serde_json::to_value(report).context("Failed to serialize report")?;

    if !redact.is_empty() {
        redact_profile(&mut value, redact);
    }

    serde_json::to_string_pretty(&value).context("Failed to render JSON report")
}

/// Strip the given keys from each record under `profile`.
fn redact_profile(value: &mut Value, keys: &[String]) {
    let Some(Value::Object(profile)) = value.get_mut("profile") else {
        return;
    };

    for field in ["user", "company", "status"] {
        if let Some(record) = profile.remove(field) {
            let mut stripped = transform::strip_properties(keys, vec![record]);
            if let Some(record) = stripped.pop() {
                profile.insert(field.to_string(), record);
            }
        }
    }
}

/// Generate the human-readable text report.
pub fn generate_text_report(report: &ProfileReport) -> String {
    let mut output = String::new();

    output.push_str("# Directory Lookup\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_user_section(&report.profile));
    output.push_str(&generate_company_section(&report.profile));
    output.push_str(&generate_status_section(&report.profile));

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** {}\n", metadata.source));
    section.push_str(&format!(
        "- **Fetched:** {}\n",
        metadata.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Duration:** {:.1}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

/// Generate the user section.
fn generate_user_section(profile: &UserProfile) -> String {
    let mut section = String::new();

    section.push_str("## User\n\n");
    section.push_str(&format!("- **Name:** {}\n", profile.user.name));
    section.push_str(&format!("- **Company ID:** {}\n", profile.user.company_id));
    for (key, value) in &profile.user.extra {
        section.push_str(&format!("- **{}:** {}\n", key, value));
    }
    section.push('\n');

    section
}

/// Generate the company section.
fn generate_company_section(profile: &UserProfile) -> String {
    let mut section = String::new();

    section.push_str("## Company\n\n");
    section.push_str(&format!("- **ID:** {}\n", profile.company.id));
    for (key, value) in &profile.company.extra {
        section.push_str(&format!("- **{}:** {}\n", key, value));
    }
    section.push('\n');

    section
}

/// Generate the status section, passing the record through as-is.
fn generate_status_section(profile: &UserProfile) -> String {
    let pretty = serde_json::to_string_pretty(&profile.status.0)
        .unwrap_or_else(|_| profile.status.0.to_string());

    format!("## Status\n\n```json\n{}\n```\n", pretty)
}
