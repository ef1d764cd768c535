//! Health endpoint: bootstrap check.

use axum::Json;
use axum::extract::State;
use chatrelay_core::messages;
use tracing::warn;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /health`: verifies the DB connection and reports the completion mode.
///
/// Always answers 200; failures show up in the body.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_connected = sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .is_ok();

    let turns = match messages::count(&state.pool).await {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Message count failed: {e}");
            None
        }
    };

    Json(HealthResponse {
        status: "ok".into(),
        version: chatrelay_core::version().to_string(),
        db_connected,
        turns,
        completion_mode: state.gateway.mode().to_string(),
    })
}
