//! Directory service collaborators.
//!
//! This module defines the capability trait the aggregator consumes and
//! the HTTP-backed implementation used by the CLI.

pub mod http;
pub mod service;

pub use http::HttpDirectoryClient;
pub use service::{DirectoryServices, ServiceError};
