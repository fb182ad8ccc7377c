//! User profile and reservation models
//!
//! Profiles live at `users/{uid}`. Username and email uniqueness is kept by
//! reservation documents written in the same atomic batch as the profile,
//! since the document store has no native unique constraint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub uid: String,
    pub email: String,
    pub email_lower: String,
    pub username: String,
    pub username_lower: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Date of birth as an ISO date string, if the user provided one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Problem ids the user has marked as solved
    #[serde(default)]
    pub solved: Vec<String>,
}

/// Username reservation document, keyed by the lowercased username.
///
/// Exists 1:1 with the owning profile's current username.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameReservation {
    pub uid: String,
    pub username_lower: String,
    pub email_lower: String,
}

/// Email reservation document, keyed by the lowercased email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailReservation {
    pub uid: String,
    pub email_lower: String,
}

impl UserRecord {
    /// True when this profile currently holds the given normalized username
    pub fn holds_username(&self, username_lower: &str) -> bool {
        self.username_lower == username_lower
    }
}
