//! API server configuration.

use std::path::PathBuf;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Host/interface to bind (e.g. "0.0.0.0").
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// SQLite database file holding the message log.
    pub database_path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            database_path: chatrelay_core::db::default_database_path(),
        }
    }
}

impl ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:5000").
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_5000() {
        let config = ApiConfig::default();
        assert_eq!("0.0.0.0:5000", config.bind_addr());
        assert_eq!(PathBuf::from("chat.db"), config.database_path);
    }
}
