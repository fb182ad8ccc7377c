//! Document store abstraction
//!
//! The store is a tree of JSON documents addressed by slash-separated paths
//! (`users/{uid}`, `usernames/{usernameLower}`, ...). It has no unique
//! constraints; the one transactional primitive is an atomic multi-document
//! batch commit, which the reservation protocol depends on.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::collections;
use crate::error::{AppError, AppResult};

/// A document read from the store
#[derive(Debug, Clone)]
pub struct Document {
    /// Store-relative path, e.g. `users/abc123`
    pub path: String,
    /// Document body as a JSON object
    pub fields: Value,
}

impl Document {
    /// Deserialize the document body into a typed model
    pub fn to_model<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_value(self.fields.clone())
            .map_err(|e| AppError::Store(format!("malformed document at {}: {}", self.path, e)))
    }

    /// The final path segment (the document id)
    pub fn id(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A single write inside an atomic batch
#[derive(Debug, Clone)]
pub enum WriteOp {
    /// Write a new document; the whole batch fails if it already exists
    Create { path: String, fields: Value },
    /// Write a document unconditionally (full overwrite)
    Set { path: String, fields: Value },
    /// Update only the provided top-level fields, creating the document if absent
    Merge { path: String, fields: Value },
    /// Delete a document (deleting a missing document is not an error)
    Delete { path: String },
}

/// Managed document database client.
///
/// `commit` must be all-or-nothing: the reservation invariants rely on the
/// store applying every write in a batch atomically.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document, `None` when it does not exist
    async fn get(&self, path: &str) -> AppResult<Option<Document>>;

    /// List the documents of a collection
    async fn list(&self, collection_path: &str) -> AppResult<Vec<Document>>;

    /// Apply a batch of writes atomically.
    ///
    /// A failed `Create` precondition surfaces as [`AppError::Conflict`].
    async fn commit(&self, writes: Vec<WriteOp>) -> AppResult<()>;
}

/// Canonical document paths
pub mod paths {
    use super::collections;

    /// `users/{uid}`
    pub fn user(uid: &str) -> String {
        format!("{}/{}", collections::USERS, uid)
    }

    /// `usernames/{usernameLower}`
    pub fn username(username_lower: &str) -> String {
        format!("{}/{}", collections::USERNAMES, username_lower)
    }

    /// `emails/{emailLower}`
    pub fn email(email_lower: &str) -> String {
        format!("{}/{}", collections::EMAILS, email_lower)
    }

    /// `users/{uid}/notes` collection
    pub fn notes(uid: &str) -> String {
        format!("{}/{}/{}", collections::USERS, uid, collections::NOTES)
    }

    /// `users/{uid}/notes/{noteId}`
    pub fn note(uid: &str, note_id: &str) -> String {
        format!("{}/{}", notes(uid), note_id)
    }
}
