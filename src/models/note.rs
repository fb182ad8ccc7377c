//! Per-user note model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A markdown note stored at `users/{uid}/notes/{noteId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
