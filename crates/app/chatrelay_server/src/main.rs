//! chatrelay HTTP server binary.
//!
//! Opens the SQLite message log, creates its table if needed, and serves the
//! chat API until interrupted.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chatrelay_api::config::{ApiConfig, DEFAULT_PORT};
use chatrelay_core::completion::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use chatrelay_core::completion::{CompletionConfig, CompletionGateway};
use clap::Parser;
use tracing::{info, warn};

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "chatrelay_server", about = "chatrelay API server")]
struct Args {
    /// Host/interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// SQLite database file holding the message log.
    #[arg(long, env = "CHAT_DB_PATH", default_value = chatrelay_core::db::DEFAULT_DATABASE_FILE)]
    database: PathBuf,

    /// Completion provider API key. Without it replies echo the input.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Chat-completion endpoint URL.
    #[arg(long, env = "COMPLETION_URL", default_value = DEFAULT_ENDPOINT)]
    completion_url: String,

    /// Model identifier sent to the provider.
    #[arg(long, env = "COMPLETION_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Timeout for a single provider request, in seconds.
    #[arg(long, env = "COMPLETION_TIMEOUT_SECS", default_value_t = 30)]
    completion_timeout_secs: u64,

    /// Create the database and table, then exit without serving.
    #[arg(long, default_value_t = false)]
    init_db: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,chatrelay_api=debug,chatrelay_core=debug")
            }),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        database_path: args.database,
    };

    info!(database = %config.database_path.display(), "opening chat database");
    let pool = chatrelay_core::db::open(&config.database_path).await?;
    chatrelay_api::ensure_schema(&pool).await?;

    if args.init_db {
        info!(database = %config.database_path.display(), "database initialized");
        pool.close().await;
        return Ok(());
    }

    let completion = CompletionConfig {
        endpoint: args.completion_url,
        model: args.model,
        timeout: Duration::from_secs(args.completion_timeout_secs),
        ..CompletionConfig::default()
    }
    .with_api_key(args.api_key);

    if completion.api_key.is_some() {
        info!(endpoint = %completion.endpoint, model = %completion.model, "completion provider API key loaded");
    } else {
        warn!("OPENAI_API_KEY not set; replies will fall back to echo messages");
    }

    let gateway = Arc::new(CompletionGateway::new(completion)?);

    let state = chatrelay_api::AppState {
        pool: pool.clone(),
        gateway,
    };

    let app = chatrelay_api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutting down");
    pool.close().await;

    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_env_and_defaults() {
        let args = Args::try_parse_from([
            "chatrelay_server",
            "--port",
            "8080",
            "--database",
            "data/log.db",
            "--completion-timeout-secs",
            "5",
            "--init-db",
        ])
        .unwrap();
        assert_eq!(8080, args.port);
        assert_eq!(PathBuf::from("data/log.db"), args.database);
        assert_eq!(5, args.completion_timeout_secs);
        assert!(args.init_db);
    }
}
