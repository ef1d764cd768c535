//! Chat turn persistence.
//!
//! The message log is append-only: turns are inserted and read back in
//! arrival order, never updated or deleted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::Result;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

impl Role {
    /// Lowercase name as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Ai => "ai",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ChatTurn {
    /// Store-assigned, strictly increasing.
    pub id: i64,
    pub role: Role,
    pub content: String,
    /// Assigned by the database at insert time.
    pub created_at: DateTime<Utc>,
}

/// Append a turn to the log and return it as stored.
pub async fn append(pool: &SqlitePool, role: Role, content: &str) -> Result<ChatTurn> {
    let turn = sqlx::query_as::<_, ChatTurn>(
        r#"
        INSERT INTO messages (role, content)
        VALUES (?, ?)
        RETURNING id, role, content, created_at
        "#,
    )
    .bind(role)
    .bind(content)
    .fetch_one(pool)
    .await?;

    tracing::debug!(id = turn.id, role = %turn.role, "appended chat turn");
    Ok(turn)
}

/// Every turn in the log, oldest first.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ChatTurn>> {
    let turns = sqlx::query_as::<_, ChatTurn>(
        r#"
        SELECT id, role, content, created_at
        FROM messages
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(turns)
}

/// Number of stored turns.
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
        .fetch_one(pool)
        .await?;
    Ok(total)
}
