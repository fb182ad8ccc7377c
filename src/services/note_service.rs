//! Notes service
//!
//! Straightforward per-user CRUD against the `users/{uid}/notes`
//! subcollection.

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Note;
use crate::store::{paths, DocumentStore, WriteOp};

/// Notes service
pub struct NoteService;

impl NoteService {
    /// List a user's notes, most recently updated first
    pub async fn list(store: &dyn DocumentStore, uid: &str) -> AppResult<Vec<Note>> {
        let docs = store.list(&paths::notes(uid)).await?;
        let mut notes: Vec<Note> = docs
            .iter()
            .map(|doc| doc.to_model())
            .collect::<AppResult<_>>()?;
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    /// Create a note
    pub async fn create(
        store: &dyn DocumentStore,
        uid: &str,
        title: &str,
        content: &str,
    ) -> AppResult<Note> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };

        store
            .commit(vec![WriteOp::Create {
                path: paths::note(uid, &note.id),
                fields: serde_json::to_value(&note)
                    .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize note: {e}")))?,
            }])
            .await?;

        Ok(note)
    }

    /// Update a note's title and/or content
    pub async fn update(
        store: &dyn DocumentStore,
        uid: &str,
        note_id: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> AppResult<Note> {
        let path = paths::note(uid, note_id);
        let mut note: Note = store
            .get(&path)
            .await?
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?
            .to_model()?;

        if let Some(title) = title {
            note.title = title.to_string();
        }
        if let Some(content) = content {
            note.content = content.to_string();
        }
        note.updated_at = Utc::now();

        store
            .commit(vec![WriteOp::Merge {
                path,
                fields: json!({
                    "title": note.title,
                    "content": note.content,
                    "updatedAt": note.updated_at,
                }),
            }])
            .await?;

        Ok(note)
    }

    /// Delete a note
    pub async fn delete(store: &dyn DocumentStore, uid: &str, note_id: &str) -> AppResult<()> {
        let path = paths::note(uid, note_id);
        if store.get(&path).await?.is_none() {
            return Err(AppError::NotFound("Note not found".to_string()));
        }

        store.commit(vec![WriteOp::Delete { path }]).await
    }
}
