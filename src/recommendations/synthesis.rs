//! Recommendation Synthesis
//!
//! Walks the profile's categories in iteration order. Each category whose
//! mean is at or below the recommendation threshold contributes every rule
//! whose condition holds for that mean, in rule-table order. A low overall
//! score adds one cross-cutting comprehensive plan, filed under organization.
//!
//! The rule table is consulted purely by score.

use crate::tables::ScoringTables;
use crate::types::{Category, FarmProfile, Recommendation};

/// Candidate recommendations in synthesis order (unranked)
pub fn synthesize_recommendations(profile: &FarmProfile, tables: &ScoringTables) -> Vec<Recommendation> {
    let thresholds = tables.thresholds();
    let mut recommendations = Vec::new();

    for (category, &score) in &profile.scores {
        if score > thresholds.recommendation {
            continue;
        }
        recommendations.extend(
            tables
                .rules_for(category)
                .iter()
                .filter(|rule| rule.condition.holds(score))
                .map(|rule| rule.template.instantiate(category.clone())),
        );
    }

    if profile.overall_score <= thresholds.comprehensive_plan {
        if let Some(plan) = tables.comprehensive_plan() {
            recommendations.push(plan.instantiate(Category::Organization));
        }
    }

    recommendations
}
