// src/services/notifier.rs

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Telegram formatting dialect the reports are written in.
const PARSE_MODE: &str = "Markdown";

/// Errors that can occur while delivering a report.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with an error.
    #[error("API error (HTTP {status}): {description}")]
    Api { status: u16, description: String },

    /// The API answered with something that is not a Telegram reply.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Destination for formatted reports.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Sends reports through the Telegram Bot API `sendMessage` method.
pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
    timeout_secs: u64,
}

impl TelegramNotifier {
    pub fn new(
        base_url: &str,
        bot_token: &str,
        chat_id: &str,
        timeout_secs: u64,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
            timeout_secs,
        })
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Deserialize)]
struct TelegramReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: PARSE_MODE,
        };

        // The URL carries the bot token, so it never goes into an error message.
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Timeout(self.timeout_secs)
                } else {
                    NotifyError::Network(e.without_url().to_string())
                }
            })?;

        let status = response.status().as_u16();
        let reply: TelegramReply = response.json().await.map_err(|e| {
            NotifyError::InvalidResponse(format!(
                "HTTP {}: failed to parse body: {}",
                status,
                e.without_url()
            ))
        })?;

        if !(200..300).contains(&status) || !reply.ok {
            return Err(NotifyError::Api {
                status,
                description: reply.description.unwrap_or_default(),
            });
        }

        Ok(())
    }
}

/// Delivers a report without letting a failure reach the caller.
///
/// The send runs in its own task so even a panic inside a notifier stays
/// contained. Exactly one attempt is made. Returns whether delivery succeeded.
pub async fn deliver(notifier: Arc<dyn Notifier>, text: String) -> bool {
    let task = tokio::spawn(async move { notifier.send(&text).await });

    match task.await {
        Ok(Ok(())) => {
            tracing::debug!("Report delivered to Telegram");
            true
        }
        Ok(Err(e)) => {
            tracing::error!("Failed to send report to Telegram: {}", e);
            false
        }
        Err(e) => {
            tracing::error!("Notifier task failed: {}", e);
            false
        }
    }
}
