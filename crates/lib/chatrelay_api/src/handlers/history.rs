//! History request handler.

use axum::Json;
use axum::extract::State;
use chatrelay_core::messages::{self, ChatTurn};

use crate::AppState;
use crate::error::{AppError, AppResult};

/// `GET /history`: every stored turn, oldest first.
pub async fn history_handler(State(state): State<AppState>) -> AppResult<Json<Vec<ChatTurn>>> {
    let turns = messages::list_all(&state.pool)
        .await
        .map_err(AppError::read)?;
    Ok(Json(turns))
}
