//! Note handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Note routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_notes))
        .route("/", post(handler::create_note))
        .route("/{id}", put(handler::update_note))
        .route("/{id}", delete(handler::delete_note))
}
