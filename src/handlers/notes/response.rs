//! Note response DTOs

use serde::Serialize;

use crate::models::Note;

/// Note listing
#[derive(Debug, Serialize)]
pub struct NotesListResponse {
    pub notes: Vec<Note>,
    pub total: usize,
}

/// Note deletion confirmation
#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    pub message: String,
}
