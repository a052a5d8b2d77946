// src/handlers/submit.rs

use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use chrono::Utc;

use crate::{
    error::AppError,
    models::submission::{Submission, SubmitResponse},
    services::{notifier, report, scorer},
    state::AppState,
};

/// Grades a quiz submission and relays the report to Telegram.
///
/// * Refuses to do anything while Telegram credentials are missing (500).
/// * Accepts a JSON object or a JSON-encoded string body.
/// * Delivery to Telegram is best-effort: its failure never changes the response.
pub async fn submit_quiz(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let Some(notifier) = state.notifier.clone() else {
        tracing::error!("Telegram bot configuration missing");
        return Err(AppError::Configuration(
            "Telegram credentials not configured".to_string(),
        ));
    };

    let submission = Submission::from_body(&body)?;
    let key = &state.config.answer_key;

    let result = scorer::grade(&submission, key);
    let text = report::render(&submission, &result, key, Utc::now());

    tracing::info!(
        student = submission.student_name(),
        group = submission.student_group(),
        score = %result.score_display(),
        "Submission graded"
    );

    let delivered = notifier::deliver(notifier, text).await;
    if !delivered {
        tracing::warn!(
            student = submission.student_name(),
            "Report was not delivered, returning result anyway"
        );
    }

    Ok(Json(SubmitResponse {
        success: true,
        score: result.score_display(),
        percentage: result.percentage_display(),
        message: "Test submitted successfully".to_string(),
    }))
}
