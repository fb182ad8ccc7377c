//! Code execution handler
//!
//! The response body is the judge's raw result shape. On the authenticated
//! path the output fields stay base64-encoded for the client to decode; the
//! public-endpoint path returns them decoded.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::ExecutionResult,
    services::{execution_service::ExecutionInput, ExecutionService},
    state::AppState,
};

/// Code execution request.
///
/// Fields are optional here so missing ones produce the endpoint's canonical
/// validation message instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    pub language_id: Option<i64>,
    pub source_code: Option<String>,
    pub stdin: Option<String>,
}

/// Run a code submission on the remote judge
async fn run_code(
    State(state): State<AppState>,
    Json(payload): Json<ExecuteRequest>,
) -> AppResult<Json<ExecutionResult>> {
    let result = ExecutionService::execute(
        state.judge(),
        ExecutionInput {
            language_id: payload.language_id,
            source_code: payload.source_code,
            stdin: payload.stdin,
        },
    )
    .await?;

    Ok(Json(result))
}

/// Execution routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/execute", post(run_code))
}
