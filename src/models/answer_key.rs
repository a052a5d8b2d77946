// src/models/answer_key.rs

use thiserror::Error;

/// Correct letters of the built-in quiz, question 1 first.
pub const DEFAULT_ANSWER_KEY: [&str; 20] = [
    "b", "d", "c", "c", "c", //
    "b", "d", "b", "c", "b", //
    "b", "c", "d", "d", "b", //
    "b", "c", "b", "b", "c",
];

/// Questions per row in the key summary.
const SUMMARY_ROW: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerKeyError {
    #[error("answer key must contain at least one question")]
    Empty,

    #[error("answer for question {0} is empty")]
    EmptyAnswer(usize),
}

/// Fixed mapping from question number (1-based) to the correct choice.
///
/// Built once at startup and shared read-only with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    answers: Vec<String>,
}

impl AnswerKey {
    pub fn new(answers: Vec<String>) -> Result<Self, AnswerKeyError> {
        if answers.is_empty() {
            return Err(AnswerKeyError::Empty);
        }
        if let Some(pos) = answers.iter().position(|a| a.is_empty()) {
            return Err(AnswerKeyError::EmptyAnswer(pos + 1));
        }
        Ok(Self { answers })
    }

    /// Parses a comma-separated list such as `"b,d,c"`.
    pub fn parse(raw: &str) -> Result<Self, AnswerKeyError> {
        if raw.trim().is_empty() {
            return Err(AnswerKeyError::Empty);
        }
        Self::new(raw.split(',').map(|a| a.trim().to_string()).collect())
    }

    /// Number of questions; scoring always runs over `1..=len`.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Correct answer for a 1-based question number.
    pub fn correct(&self, question: usize) -> Option<&str> {
        question
            .checked_sub(1)
            .and_then(|idx| self.answers.get(idx))
            .map(String::as_str)
    }

    /// Iterates `(question, correct answer)` in question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.answers
            .iter()
            .enumerate()
            .map(|(idx, a)| (idx + 1, a.as_str()))
    }

    /// Renders the key as rows of five, e.g. `1-5: b,d,c,c,c`.
    pub fn summary_rows(&self) -> Vec<String> {
        self.answers
            .chunks(SUMMARY_ROW)
            .enumerate()
            .map(|(row, chunk)| {
                let first = row * SUMMARY_ROW + 1;
                let last = first + chunk.len() - 1;
                format!("{}-{}: {}", first, last, chunk.join(","))
            })
            .collect()
    }
}

impl Default for AnswerKey {
    fn default() -> Self {
        Self {
            answers: DEFAULT_ANSWER_KEY.iter().map(|a| a.to_string()).collect(),
        }
    }
}
