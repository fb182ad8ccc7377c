//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod assistant;
pub mod auth;
pub mod execute;
pub mod health;
pub mod notes;
pub mod problems;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(execute::routes())
        .merge(assistant::routes())
        .nest("/auth", auth::routes())
        .nest("/problems", problems::routes())
        .nest("/notes", notes::routes())
}
