// src/models/submission.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

/// Shown for a missing student name or group.
pub const UNKNOWN: &str = "Unknown";

/// Longest answer value accepted for a single question.
const MAX_ANSWER_LEN: usize = 16;

/// One student's quiz attempt, as posted by the quiz page.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[validate(length(max = 100))]
    pub student_name: Option<String>,

    #[validate(length(max = 100))]
    pub student_group: Option<String>,

    /// Chosen letters keyed by `q1`, `q2`, ... A `null` value means no answer.
    #[validate(custom(function = validate_answers))]
    pub answers: Option<HashMap<String, Option<String>>>,

    /// Seconds spent on the quiz.
    pub time_taken: Option<u64>,

    /// How many times the student switched away from the quiz page.
    pub page_leaves: Option<u64>,

    /// Client-side submission time (RFC 3339).
    pub submitted_at: Option<String>,
}

impl Submission {
    /// Decodes and validates a request body.
    ///
    /// Accepts a JSON object, or a JSON string holding the encoded object.
    /// A body without an `answers` object is rejected.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body)?;
        let value = match value {
            Value::String(raw) => serde_json::from_str(&raw)?,
            other => other,
        };

        let submission: Submission = serde_json::from_value(value)?;
        submission.validate()?;

        if submission.answers.is_none() {
            return Err(AppError::BadRequest("answers are required".to_string()));
        }

        Ok(submission)
    }

    pub fn student_name(&self) -> &str {
        non_empty(self.student_name.as_deref()).unwrap_or(UNKNOWN)
    }

    pub fn student_group(&self) -> &str {
        non_empty(self.student_group.as_deref()).unwrap_or(UNKNOWN)
    }

    pub fn time_taken(&self) -> u64 {
        self.time_taken.unwrap_or(0)
    }

    pub fn page_leaves(&self) -> u64 {
        self.page_leaves.unwrap_or(0)
    }

    /// The student's answer to a 1-based question, if one was given.
    pub fn answer(&self, question: usize) -> Option<&str> {
        let answers = self.answers.as_ref()?;
        let answer = answers.get(&format!("q{}", question))?.as_deref();
        non_empty(answer)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn validate_answers(
    answers: &HashMap<String, Option<String>>,
) -> Result<(), validator::ValidationError> {
    for answer in answers.values().flatten() {
        if answer.chars().count() > MAX_ANSWER_LEN {
            return Err(validator::ValidationError::new("answer_too_long"));
        }
    }
    Ok(())
}

/// DTO returned to the quiz page after grading.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub score: String,
    pub percentage: String,
    pub message: String,
}
