//! Completion gateway: turns a user message into reply text.
//!
//! With a credential configured, the message is sent as a single-turn request
//! to an OpenAI-compatible chat-completions endpoint. Without one, the
//! gateway echoes the input back. Provider failures never escape as errors:
//! they become a [`Completion::Degraded`] whose text is stored and returned
//! like any other reply. No retries.

pub mod config;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use config::CompletionConfig;

/// Prefix of the reply produced in echo mode.
pub const ECHO_PREFIX: &str = "Echo: ";

/// Prefix of the reply produced when the provider call failed.
pub const DEGRADED_PREFIX: &str = "AI error: ";

/// Errors from building the gateway or talking to the provider.
///
/// `Display` output is the best-effort message that ends up in a degraded
/// reply, so variants render without extra decoration.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Provider(String),

    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

/// Outcome of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Provider reply, trimmed.
    Reply(String),
    /// No credential configured; carries the original input.
    Echo(String),
    /// Provider call failed; carries the failure reason.
    Degraded(String),
}

impl Completion {
    /// The reply text as persisted and returned to the caller.
    pub fn text(&self) -> String {
        match self {
            Completion::Reply(text) => text.clone(),
            Completion::Echo(input) => format!("{ECHO_PREFIX}{input}"),
            Completion::Degraded(reason) => format!("{DEGRADED_PREFIX}{reason}"),
        }
    }

    /// Consumes the outcome, returning the reply text.
    pub fn into_text(self) -> String {
        match self {
            Completion::Reply(text) => text,
            other => other.text(),
        }
    }

    /// Whether the provider call failed.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Completion::Degraded(_))
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [RequestMessage<'a>; 1],
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Stateless client for the completion provider.
#[derive(Debug, Clone)]
pub struct CompletionGateway {
    client: Client,
    config: CompletionConfig,
}

impl CompletionGateway {
    /// Builds the HTTP client with the configured request timeout.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Whether a provider credential is configured.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// `"provider"` or `"echo"`.
    pub fn mode(&self) -> &'static str {
        if self.is_configured() {
            "provider"
        } else {
            "echo"
        }
    }

    /// Produce a reply for `user_text`. Never fails; see [`Completion`].
    pub async fn complete(&self, user_text: &str) -> Completion {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Completion::Echo(user_text.to_string());
        };

        match self.request(api_key, user_text).await {
            Ok(reply) => Completion::Reply(reply),
            Err(e) => {
                tracing::warn!(error = %e, endpoint = %self.config.endpoint, "completion request failed");
                Completion::Degraded(e.to_string())
            }
        }
    }

    async fn request(&self, api_key: &str, user_text: &str) -> Result<String, CompletionError> {
        let resp = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&ChatCompletionRequest {
                model: &self.config.model,
                messages: [RequestMessage {
                    role: "user",
                    content: user_text,
                }],
            })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(CompletionError::Provider(error_message(status, &body)));
        }

        parse_reply(&body)
    }
}

/// Best-effort failure message for a non-2xx response.
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => format!("Request failed with status code {}", status.as_u16()),
    }
}

/// Extracts `choices[0].message.content`, trimmed. A blank reply is malformed.
fn parse_reply(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatCompletionResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            // Some providers report errors with a 200 status.
            if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
                return Err(CompletionError::Provider(envelope.error.message));
            }
            return Err(CompletionError::Malformed(e.to_string()));
        }
    };

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| CompletionError::Malformed("missing choices[0].message.content".into()))
        .and_then(|content| {
            if content.is_empty() {
                Err(CompletionError::Malformed("empty choices[0].message.content".into()))
            } else {
                Ok(content)
            }
        })
}
