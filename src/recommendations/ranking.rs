//! Recommendation Ranking
//!
//! Stable sort: priority descending, then estimated impact descending.
//! Equal pairs keep synthesis order.

use crate::types::Recommendation;
use std::cmp::Reverse;

pub fn rank_recommendations(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    // sort_by_key is stable
    recommendations.sort_by_key(|r| Reverse((r.priority.ordinal(), r.estimated_impact.ordinal())));
    recommendations
}
