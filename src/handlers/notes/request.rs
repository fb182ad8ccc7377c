//! Note request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NOTE_CONTENT_LENGTH, MAX_NOTE_TITLE_LENGTH};

/// Note creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[validate(length(min = 1, max = MAX_NOTE_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_NOTE_CONTENT_LENGTH))]
    #[serde(default)]
    pub content: String,
}

/// Note update request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNoteRequest {
    #[validate(length(min = 1, max = MAX_NOTE_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_NOTE_CONTENT_LENGTH))]
    pub content: Option<String>,
}
