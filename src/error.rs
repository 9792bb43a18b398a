//! Configuration errors for custom scoring tables.
//!
//! Scoring itself never fails; only loading a table file can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed scoring table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("answer '{value}' for question '{question_id}' scores {score}, expected 1-5")]
    AnswerScoreOutOfRange {
        question_id: String,
        value: String,
        score: i64,
    },

    #[error("threshold '{name}' must be a finite value in 0-5, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("improvement threshold {improvement} must be below strength threshold {strength}")]
    OverlappingThresholds { improvement: f64, strength: f64 },

    #[error("category '{0}' has an empty rule list")]
    EmptyRuleList(String),
}
