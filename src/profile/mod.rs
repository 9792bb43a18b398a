//! Farm profile construction
//!
//! Responses -> category means (aggregation) -> strength and improvement
//! labels (classification) -> `FarmProfile`.

pub mod aggregation;
pub mod classification;

pub use aggregation::{aggregate_scores, CategoryAggregate, EMPTY_OVERALL_SCORE};
pub use classification::{
    classify_profile, CategoryStanding, Classification, IMPROVEMENTS_FALLBACK, STRENGTHS_FALLBACK,
};

use crate::tables::ScoringTables;
use crate::types::{AssessmentResponse, FarmProfile};

/// Build the profile from an already computed aggregate
pub fn profile_from_aggregate(aggregate: &CategoryAggregate, tables: &ScoringTables) -> FarmProfile {
    let Classification {
        strengths,
        improvement_areas,
    } = classify_profile(&aggregate.scores, tables);

    FarmProfile {
        scores: aggregate.scores.clone(),
        strengths,
        improvement_areas,
        overall_score: aggregate.overall_score,
    }
}

/// Normalize, aggregate and classify a response set
pub fn build_profile<'a, I>(responses: I, tables: &ScoringTables) -> FarmProfile
where
    I: IntoIterator<Item = &'a AssessmentResponse>,
{
    profile_from_aggregate(&aggregate_scores(responses, tables), tables)
}
