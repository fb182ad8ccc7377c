//! Note handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Note,
    services::NoteService,
    state::AppState,
};

use super::{
    request::{CreateNoteRequest, UpdateNoteRequest},
    response::{DeleteNoteResponse, NotesListResponse},
};

/// List the authenticated user's notes
pub async fn list_notes(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<NotesListResponse>> {
    let notes = NoteService::list(state.store(), &user.uid).await?;
    let total = notes.len();

    Ok(Json(NotesListResponse { notes, total }))
}

/// Create a note
pub async fn create_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateNoteRequest>,
) -> AppResult<(StatusCode, Json<Note>)> {
    payload.validate()?;

    let note = NoteService::create(state.store(), &user.uid, &payload.title, &payload.content).await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// Update a note
pub async fn update_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNoteRequest>,
) -> AppResult<Json<Note>> {
    payload.validate()?;

    let note = NoteService::update(
        state.store(),
        &user.uid,
        &id,
        payload.title.as_deref(),
        payload.content.as_deref(),
    )
    .await?;

    Ok(Json(note))
}

/// Delete a note
pub async fn delete_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteNoteResponse>> {
    NoteService::delete(state.store(), &user.uid, &id).await?;

    Ok(Json(DeleteNoteResponse {
        message: "Note deleted".to_string(),
    }))
}
