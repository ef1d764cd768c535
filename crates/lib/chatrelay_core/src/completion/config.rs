//! Completion provider configuration.

use std::time::Duration;

/// Default chat-completion endpoint (OpenRouter, OpenAI-compatible).
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default upper bound on a single provider request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved settings for the completion provider.
///
/// Built once at startup by the server binary; the gateway never reads the
/// environment itself.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Bearer credential. `None` puts the gateway in echo mode.
    pub api_key: Option<String>,
    /// Chat-completion endpoint URL.
    pub endpoint: String,
    /// Model identifier.
    pub model: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CompletionConfig {
    /// Returns a copy with the given credential (blank counts as unset).
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = normalize_api_key(api_key);
        self
    }
}

/// Blank keys are treated as missing.
fn normalize_api_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
