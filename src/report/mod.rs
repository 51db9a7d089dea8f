//! Report rendering.
//!
//! This module renders resolved profiles as text or JSON reports.

pub mod generator;

pub use generator::{generate_json_report, generate_text_report, ProfileReport, ReportMetadata};
