//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chatrelay_core::messages::{self, Role};
use tracing::{debug, warn};

use crate::AppState;
use crate::error::{AppError, AppResult, MESSAGE_REQUIRED};
use crate::models::{ChatRequest, ChatResponse};

/// `POST /chat`: store the user turn, ask the gateway, store the reply.
///
/// A body that is missing, malformed, or has an empty `message` is rejected
/// before anything is stored. A failed user-turn insert aborts the request
/// before the provider is called.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let message = extract_message(body)?;

    messages::append(&state.pool, Role::User, &message)
        .await
        .map_err(AppError::write)?;

    let completion = state.gateway.complete(&message).await;
    if completion.is_degraded() {
        warn!(reply = %completion.text(), "storing degraded completion");
    }
    let ai = completion.into_text();

    messages::append(&state.pool, Role::Ai, &ai)
        .await
        .map_err(AppError::write)?;

    Ok(Json(ChatResponse { user: message, ai }))
}

fn extract_message(body: Result<Json<ChatRequest>, JsonRejection>) -> AppResult<String> {
    let Json(request) = body.map_err(|rejection| {
        debug!(%rejection, "rejecting chat body");
        AppError::Validation(MESSAGE_REQUIRED.into())
    })?;

    request
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation(MESSAGE_REQUIRED.into()))
}
