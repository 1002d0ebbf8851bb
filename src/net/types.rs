//! Shared wire-protocol DTOs for the data platform boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the platform's documents (`_id`, `_creationTime`,
//! camelCase columns) through serde renames so query results decode without
//! hand-written mapping.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role stored on the user document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Guest,
}

fn default_active() -> bool {
    true
}

/// A user account as returned by the auth session and user queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Document id (`_id` on the data platform, `id` on the auth endpoints).
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    /// Display name; only field this client ever patches.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
    /// Last sign-in, ms since the epoch.
    #[serde(rename = "lastLogin", default)]
    pub last_login: Option<f64>,
}

/// The author subset joined onto each message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageAuthor {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
}

/// A stored chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    /// Server-assigned creation time, ms since the epoch.
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub content: String,
    /// Client-visible creation time, ms since the epoch.
    #[serde(rename = "createdAt")]
    pub created_at: f64,
}

/// A message with its resolved author, when the join found one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageWithUser {
    #[serde(default)]
    pub user: Option<MessageAuthor>,
    pub message: Message,
}

/// Snapshot of the auth session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
}
