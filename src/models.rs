//! Data models for the directory lookup tool.
//!
//! This module contains the core data structures used throughout
//! the application for representing users, companies, status records,
//! and the aggregated profile.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record from the external user directory.
///
/// The directory owns this shape. Beyond the two fields the lookup relies
/// on, any additional fields are preserved in `extra` so records pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique name used as the lookup key.
    pub name: String,
    /// Identifier of the company this user belongs to.
    pub company_id: u64,
    /// Additional fields returned by the directory.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A company record from the external company directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Company identifier.
    pub id: u64,
    /// Additional fields returned by the directory.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    /// Returns the company's display name, when the directory provides one.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

/// An opaque status record returned by the status service.
///
/// The structure is owned by the collaborator and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(pub Value);

impl Status {
    /// Reads the conventional `ok` flag when the status record carries one.
    pub fn ok(&self) -> Option<bool> {
        self.0.get("ok").and_then(Value::as_bool)
    }
}

/// Combined result of one lookup: the user's company, the global status,
/// and the resolved user record.
///
/// A transient value with no identity beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The company the resolved user belongs to.
    pub company: Company,
    /// The global status record.
    pub status: Status,
    /// The resolved user.
    pub user: User,
}
