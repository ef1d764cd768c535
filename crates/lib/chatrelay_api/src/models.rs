//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// `POST /chat` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// Missing and `null` both deserialize to `None`.
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /chat` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub user: String,
    pub ai: String,
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /health` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub db_connected: bool,
    /// `None` when the log could not be counted.
    pub turns: Option<i64>,
    /// `"provider"` or `"echo"`.
    pub completion_mode: String,
}
