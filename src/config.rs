// src/config.rs

use std::{env, sync::Arc};

use dotenvy::dotenv;
use thiserror::Error;

use crate::models::answer_key::{AnswerKey, AnswerKeyError};

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("QUIZ_ANSWER_KEY is invalid: {0}")]
    InvalidAnswerKey(#[from] AnswerKeyError),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Both Telegram values are optional at startup; submissions need them.
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_base: String,
    pub notify_timeout_secs: u64,
    pub answer_key: Arc<AnswerKey>,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let notify_timeout_secs = match var("TELEGRAM_TIMEOUT_SECS") {
            Some(raw) => parse_number("TELEGRAM_TIMEOUT_SECS", raw)?,
            None => DEFAULT_NOTIFY_TIMEOUT_SECS,
        };
        // A zero timeout would fail every notification before it is sent.
        if notify_timeout_secs == 0 {
            return Err(ConfigError::Zero("TELEGRAM_TIMEOUT_SECS"));
        }

        let port = match var("PORT") {
            Some(raw) => parse_number("PORT", raw)?,
            None => DEFAULT_PORT,
        };

        let answer_key = match var("QUIZ_ANSWER_KEY") {
            Some(raw) => AnswerKey::parse(&raw)?,
            None => AnswerKey::default(),
        };

        Ok(Self {
            telegram_bot_token: var("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: var("TELEGRAM_CHAT_ID"),
            telegram_api_base: var("TELEGRAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),
            notify_timeout_secs,
            answer_key: Arc::new(answer_key),
            port,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_dir: var("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        })
    }

    /// Bot token and chat id, when both are configured.
    pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
        match (&self.telegram_bot_token, &self.telegram_chat_id) {
            (Some(token), Some(chat_id)) => Some((token, chat_id)),
            _ => None,
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}
