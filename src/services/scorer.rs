// src/services/scorer.rs

use crate::models::{answer_key::AnswerKey, submission::Submission};

/// Percentage from which a result counts as excellent.
pub const EXCELLENT_FROM: f64 = 75.0;

/// Percentage from which a result only needs practice.
pub const PRACTICE_FROM: f64 = 50.0;

/// Outcome of a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedAnswer {
    pub question: usize,
    /// `None` when the student left the question blank.
    pub student_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Qualitative band of a percentage. Each band includes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    NeedsPractice,
    NeedsImprovement,
}

impl Verdict {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= EXCELLENT_FROM {
            Verdict::Excellent
        } else if percentage >= PRACTICE_FROM {
            Verdict::NeedsPractice
        } else {
            Verdict::NeedsImprovement
        }
    }

    pub fn banner(self) -> &'static str {
        match self {
            Verdict::Excellent => "✅ EXCELLENT!",
            Verdict::NeedsPractice => "⚠️ NEEDS PRACTICE",
            Verdict::NeedsImprovement => "❌ NEEDS IMPROVEMENT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: usize,
    pub total: usize,
    /// One entry per question, in question order.
    pub answers: Vec<GradedAnswer>,
}

impl ScoreResult {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64 * 100.0
    }

    /// `"75.0"`: always one fractional digit.
    pub fn percentage_display(&self) -> String {
        format!("{:.1}", self.percentage())
    }

    /// `"15/20"`.
    pub fn score_display(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_percentage(self.percentage())
    }
}

/// Grades a submission over every question of the key.
///
/// The range comes from the key, never from the submission: extra answers are
/// ignored and missing ones count as unanswered. Comparison is exact and
/// case-sensitive. No partial or negative credit.
pub fn grade(submission: &Submission, key: &AnswerKey) -> ScoreResult {
    let answers: Vec<GradedAnswer> = key
        .iter()
        .map(|(question, correct)| {
            let student_answer = submission.answer(question);
            GradedAnswer {
                question,
                student_answer: student_answer.map(str::to_string),
                correct_answer: correct.to_string(),
                is_correct: student_answer == Some(correct),
            }
        })
        .collect();

    let score = answers.iter().filter(|a| a.is_correct).count();

    ScoreResult {
        score,
        total: key.len(),
        answers,
    }
}
