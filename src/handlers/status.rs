// src/handlers/status.rs

use axum::{Json, extract::State, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::Config;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentStatus {
    pub has_telegram_token: bool,
    pub has_telegram_chat_id: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub environment: EnvironmentStatus,
}

/// Liveness probe. Reports which Telegram settings are present, never their values.
pub async fn status(State(config): State<Config>) -> impl IntoResponse {
    Json(StatusResponse {
        status: "API is working",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: EnvironmentStatus {
            has_telegram_token: config.telegram_bot_token.is_some(),
            has_telegram_chat_id: config.telegram_chat_id.is_some(),
        },
    })
}
