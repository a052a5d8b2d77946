// src/services/report.rs

use chrono::{DateTime, Utc};

use crate::{
    models::{answer_key::AnswerKey, submission::Submission},
    services::scorer::{GradedAnswer, ScoreResult},
    utils::markdown::escape_markdown,
};

/// Graded answers shown per line of the summary.
const ANSWERS_PER_LINE: usize = 10;

const NO_ANSWER: &str = "No answer";

/// Renders seconds as `mm:ss`. Minutes keep growing past 99.
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Picks the time shown in the report.
///
/// A client-supplied RFC 3339 `submittedAt` wins; anything else falls back
/// to the time the server processed the submission.
pub fn submission_time(submission: &Submission, received_at: DateTime<Utc>) -> DateTime<Utc> {
    submission
        .submitted_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or(received_at)
}

fn format_answer(answer: &GradedAnswer) -> String {
    let given = answer
        .student_answer
        .as_deref()
        .map(escape_markdown)
        .unwrap_or_else(|| NO_ANSWER.to_string());
    let mark = if answer.is_correct { "✅" } else { "❌" };
    format!("Q{}: {} {}", answer.question, given, mark)
}

/// Builds the chat message for a graded submission.
///
/// The text uses Telegram's legacy `Markdown` dialect; every piece of
/// student-supplied text is escaped before it is embedded.
pub fn render(
    submission: &Submission,
    result: &ScoreResult,
    key: &AnswerKey,
    received_at: DateTime<Utc>,
) -> String {
    let submitted = submission_time(submission, received_at).format("%Y-%m-%d %H:%M:%S UTC");

    let answer_lines: Vec<String> = result
        .answers
        .chunks(ANSWERS_PER_LINE)
        .map(|chunk| {
            chunk
                .iter()
                .map(format_answer)
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();

    let mut report = String::new();
    report.push_str("📚 *NEW TEST SUBMISSION*\n\n");
    report.push_str(&format!(
        "👤 *Student:* {}\n",
        escape_markdown(submission.student_name())
    ));
    report.push_str(&format!(
        "🏫 *Group:* {}\n",
        escape_markdown(submission.student_group())
    ));
    report.push_str(&format!(
        "⏱️ *Time Taken:* {}\n",
        format_duration(submission.time_taken())
    ));
    report.push_str(&format!("📅 *Submitted:* {}\n", submitted));
    report.push_str(&format!("🚪 *Page Leaves:* {}\n\n", submission.page_leaves()));
    report.push_str(&format!(
        "📊 *SCORE: {} ({}%)*\n\n",
        result.score_display(),
        result.percentage_display()
    ));
    report.push_str(result.verdict().banner());
    report.push_str("\n\n*Answers Summary:*\n");
    report.push_str(&answer_lines.join("\n\n"));
    report.push_str("\n\n*Correct Answers Key:*\n");
    report.push_str(&escape_markdown(&key.summary_rows().join("\n")));

    report
}
