//! Response Normalization
//!
//! Converts one raw answer into a score on the 1-5 maturity scale.
//!
//! Rules, in order:
//! 1. Numeric values pass through unchanged (no clamping)
//! 2. "Yes" -> 5, "No" -> 1 (exact match)
//! 3. Other strings are looked up per question in the scoring tables
//! 4. Anything unrecognized scores the neutral 3

use crate::tables::ScoringTables;
use crate::types::{AssessmentResponse, ResponseValue};

/// Score for an affirmative Yes/No answer
pub const YES_SCORE: i64 = 5;

/// Score for a negative Yes/No answer
pub const NO_SCORE: i64 = 1;

/// Score assigned to answers the catalog does not recognize
pub const NEUTRAL_SCORE: i64 = 3;

/// Normalize a single response. Never fails.
pub fn normalize_response(response: &AssessmentResponse, tables: &ScoringTables) -> i64 {
    match &response.value {
        ResponseValue::Number(n) => *n,
        ResponseValue::Text(text) => normalize_text(&response.question_id, text, tables),
    }
}

fn normalize_text(question_id: &str, text: &str, tables: &ScoringTables) -> i64 {
    match text {
        "Yes" => YES_SCORE,
        "No" => NO_SCORE,
        _ => tables.answer_score(question_id, text).unwrap_or_else(|| {
            tracing::debug!(
                question_id,
                answer = text,
                "Unrecognized answer, scoring as neutral {}",
                NEUTRAL_SCORE
            );
            NEUTRAL_SCORE
        }),
    }
}
