//! Message log schema.
//!
//! There are no versioned migrations: the single table is created with
//! `CREATE TABLE IF NOT EXISTS` on every start.

use sqlx::SqlitePool;

use crate::db::Result;

const CREATE_MESSAGES: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    role       TEXT NOT NULL CHECK (role IN ('user', 'ai')),
    content    TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)
"#;

/// Create the `messages` table if it does not exist yet.
///
/// Idempotent; safe to run repeatedly and from concurrent callers.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_MESSAGES).execute(pool).await?;
    Ok(())
}
