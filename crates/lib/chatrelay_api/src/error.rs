//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chatrelay_core::db::StorageError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Body returned when a chat request carries no usable message.
pub const MESSAGE_REQUIRED: &str = "Message required";

/// Body returned when the log cannot be read.
pub const DB_READ_ERROR: &str = "DB read error";

/// Body returned when a turn cannot be stored.
pub const DB_WRITE_ERROR: &str = "DB write error";

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage read failed: {0}")]
    StorageRead(#[source] StorageError),

    #[error("Storage write failed: {0}")]
    StorageWrite(#[source] StorageError),
}

impl AppError {
    /// Logs a failed read and wraps it.
    pub fn read(e: StorageError) -> Self {
        tracing::error!(error = %e, "DB read error");
        AppError::StorageRead(e)
    }

    /// Logs a failed write and wraps it.
    pub fn write(e: StorageError) -> Self {
        tracing::error!(error = %e, "DB write error");
        AppError::StorageWrite(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m.as_str()),
            AppError::StorageRead(_) => (StatusCode::INTERNAL_SERVER_ERROR, DB_READ_ERROR),
            AppError::StorageWrite(_) => (StatusCode::INTERNAL_SERVER_ERROR, DB_WRITE_ERROR),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let resp = AppError::Validation(MESSAGE_REQUIRED.into()).into_response();
        assert_eq!(StatusCode::BAD_REQUEST, resp.status());
    }

    #[test]
    fn storage_errors_map_to_500() {
        let read = AppError::StorageRead(StorageError::Sql(sqlx::Error::PoolClosed));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, read.into_response().status());

        let write = AppError::StorageWrite(StorageError::Sql(sqlx::Error::PoolClosed));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, write.into_response().status());
    }
}
