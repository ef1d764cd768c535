//! # chatrelay_api
//!
//! HTTP API library for chatrelay.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use chatrelay_core::completion::CompletionGateway;
use chatrelay_core::db::StorageError;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{chat, health, history};

/// Route paths.
pub mod routes {
    pub const GET_HISTORY: &str = "/history";
    pub const POST_CHAT: &str = "/chat";
    pub const GET_HEALTH: &str = "/health";
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool holding the message log.
    pub pool: SqlitePool,
    /// Completion provider client.
    pub gateway: Arc<CompletionGateway>,
}

/// Create the message log schema if needed.
///
/// Delegates to `chatrelay_core::schema::ensure_schema()` which owns the table
/// definition.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    chatrelay_core::schema::ensure_schema(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_HISTORY, get(history::history_handler))
        .route(routes::POST_CHAT, post(chat::chat_handler))
        .route(routes::GET_HEALTH, get(health::health_handler))
        .layer(cors)
        .with_state(state)
}
