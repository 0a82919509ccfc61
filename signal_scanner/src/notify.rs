//! Outbound notification transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use shared_utils::env::{MissingEnvVarError, get_env_var};
use thiserror::Error;

/// Environment variable holding the Telegram bot token.
const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum NotifyError {
    /// Transport failure (network, timeout).
    #[error("Notification request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The delivery API answered but rejected the message.
    #[error("Notification rejected: {0}")]
    Api(String),

    /// The bot token is not configured.
    #[error(transparent)]
    MissingToken(#[from] MissingEnvVarError),
}

/// Delivers a plain-text message to a fixed destination.
///
/// Failure is reported, never retried; the cycle logs it and moves on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram `sendMessage` transport.
pub struct TelegramNotifier {
    client: Client,
    token: SecretString,
    chat_id: String,
}

impl TelegramNotifier {
    /// Builds a notifier for `chat_id`, reading the bot token from the
    /// `TELEGRAM_BOT_TOKEN` environment variable.
    pub fn new(chat_id: String, timeout: Duration) -> Result<Self, NotifyError> {
        let token = SecretString::new(get_env_var(BOT_TOKEN_ENV)?.into());
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            token,
            chat_id,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!(
            "{TELEGRAM_API_BASE}/bot{}/sendMessage",
            self.token.expose_secret()
        );
        let response = self
            .client
            .post(&url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reply: Result<TelegramResponse, _> = response.json().await;
            let detail = match reply {
                Ok(r) => r.description.unwrap_or_else(|| status.to_string()),
                Err(_) => status.to_string(),
            };
            return Err(NotifyError::Api(detail));
        }

        let reply: TelegramResponse = response.json().await?;
        if !reply.ok {
            return Err(NotifyError::Api(
                reply.description.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        Ok(())
    }
}

/// Dry-run transport: prints to stdout instead of delivering.
pub struct StdoutNotifier;

#[async_trait]
impl Notifier for StdoutNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        println!("{text}");
        Ok(())
    }
}
