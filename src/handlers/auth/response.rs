//! Account response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::UserRecord;

/// User profile in responses
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub uid: String,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub dob: Option<String>,
    pub created_at: DateTime<Utc>,
    pub solved: Vec<String>,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            uid: record.uid,
            username: record.username,
            email: record.email,
            name: record.name,
            dob: record.dob,
            created_at: record.created_at,
            solved: record.solved,
        }
    }
}

/// Signup success response.
///
/// No session token: signup intentionally leaves the user signed out.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Login response carrying the identity provider's session token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

/// Current user response (for /me endpoint)
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
}
