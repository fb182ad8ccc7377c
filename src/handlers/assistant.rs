//! Assistant handler

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::AppResult, services::AssistantService, state::AppState};

/// Assistant request.
///
/// `message` is accepted as a raw JSON value so a number or object gets the
/// endpoint's canonical validation message rather than a deserialization
/// error.
#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

/// Assistant response
#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<bool>,
}

/// Ask the assistant a question
async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AssistantRequest>,
) -> AppResult<Json<AssistantResponse>> {
    let message = payload.message.as_ref().and_then(Value::as_str);
    let reply = AssistantService::reply(state.text_providers(), message).await?;

    Ok(Json(AssistantResponse {
        reply: reply.text,
        degraded: reply.degraded.then_some(true),
    }))
}

/// Assistant routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/assistant", post(ask))
}
