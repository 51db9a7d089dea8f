//! The directory services capability.
//!
//! Exactly three operations are consumed by this tool, each an external
//! collaborator with its own failure semantics. Implementations own any
//! retry or timeout behavior; callers get no partial results.

use crate::models::{Company, Status, User};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a directory service collaborator.
///
/// Propagated unchanged to callers: no retry, no wrapping beyond the
/// variant that classifies the failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    /// The service could not be reached at all.
    #[error("cannot connect to directory service at {url}")]
    Connect { url: String },

    /// The request failed before a response arrived.
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The service answered with a non-success status.
    #[error("directory service returned {status} for {url}: {body}")]
    Upstream {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// External lookups consumed by the profile aggregator.
#[async_trait]
pub trait DirectoryServices: Send + Sync {
    /// Fetch the full user list. No pagination contract is assumed.
    async fn fetch_users(&self) -> Result<Vec<User>, ServiceError>;

    /// Fetch a single company record by its identifier.
    ///
    /// Behavior on an unknown id is defined by the collaborator.
    async fn fetch_company_by_id(&self, id: u64) -> Result<Company, ServiceError>;

    /// Fetch the global status record.
    async fn fetch_status(&self) -> Result<Status, ServiceError>;
}
