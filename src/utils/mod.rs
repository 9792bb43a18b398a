//! Utility modules for readiness scoring
//!
//! - Normalization: raw answer -> 1-5 score
//! - Stats: arithmetic means used by aggregation

pub mod normalization;
pub mod stats;

pub use normalization::{normalize_response, NEUTRAL_SCORE, NO_SCORE, YES_SCORE};
pub use stats::mean;
