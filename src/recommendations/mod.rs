//! Recommendation generation: rule-table synthesis followed by stable ranking.

pub mod synthesis;
pub mod ranking;

pub use synthesis::synthesize_recommendations;
pub use ranking::rank_recommendations;

use crate::tables::ScoringTables;
use crate::types::{FarmProfile, Recommendation};

/// Synthesize and rank recommendations for a profile
pub fn generate_recommendations(profile: &FarmProfile, tables: &ScoringTables) -> Vec<Recommendation> {
    rank_recommendations(synthesize_recommendations(profile, tables))
}
