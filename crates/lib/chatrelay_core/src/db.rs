//! SQLite database access.
//!
//! Opens the connection pool backing the message log. The database lives in a
//! single file (default `./chat.db`) that is created on first open.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_FILE: &str = "chat.db";

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of pooled connections.
const MAX_CONNECTIONS: u32 = 5;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Returns the default database path.
pub fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_FILE)
}

/// Opens (creating if missing) the SQLite database at `path`.
///
/// The parent directory is created when it does not exist. The schema is not
/// touched here; call [`crate::schema::ensure_schema`] afterwards.
pub async fn open(path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    tracing::debug!(path = %path.display(), "opened chat database");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_chat_db() {
        assert_eq!(default_database_path(), PathBuf::from("chat.db"));
    }

    #[tokio::test]
    async fn open_creates_file_and_parent_dirs() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("chat.db");

        let pool = open(&path).await?;
        sqlx::query("SELECT 1").execute(&pool).await?;

        assert!(path.exists());
        pool.close().await;
        Ok(())
    }
}
