use serde::{Deserialize, Serialize};
use crate::profile::CategoryStanding;
use crate::types::{Category, Recommendation};

/// Complete readiness report for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub overall: OverallReadiness,
    pub categories: Vec<CategoryCard>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Overall score interpretation with stars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallReadiness {
    pub score: f64,
    pub stars: String,  // "★★★★☆"
    pub label: String,  // "Leading" / "Advanced" / ... / "Not assessed"
    pub message: String,
}

/// Per-category summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCard {
    pub category: Category,
    pub display_name: String,
    pub score: f64,
    pub response_count: usize,
    pub standing: CategoryStanding,
    pub interpretation: String,  // "Strength" / "Adequate" / "Needs improvement"
}
