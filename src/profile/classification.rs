//! Profile Classification
//!
//! Thresholds category means into strength and improvement labels.
//! Both cut-offs are inclusive:
//! - mean >= strength threshold (4.0): "Strong {name}"
//! - mean <= improvement threshold (2.5): "{name} optimization needed"

use crate::tables::{ScoringTables, Thresholds};
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Substituted when no category qualifies as a strength
pub const STRENGTHS_FALLBACK: &str = "Building foundational capabilities";

/// Substituted when no category needs improvement
pub const IMPROVEMENTS_FALLBACK: &str = "Continue optimizing current operations";

/// Where a single category mean falls relative to the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryStanding {
    Strength,
    Adequate,
    NeedsImprovement,
}

impl CategoryStanding {
    pub fn from_score(score: f64, thresholds: &Thresholds) -> Self {
        if score >= thresholds.strength {
            CategoryStanding::Strength
        } else if score <= thresholds.improvement {
            CategoryStanding::NeedsImprovement
        } else {
            CategoryStanding::Adequate
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            CategoryStanding::Strength => "Strength",
            CategoryStanding::Adequate => "Adequate",
            CategoryStanding::NeedsImprovement => "Needs improvement",
        }
    }
}

/// Qualitative labels derived from category means
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
}

/// Label every scored category, then fill empty lists with their fallback
pub fn classify_profile(scores: &BTreeMap<Category, f64>, tables: &ScoringTables) -> Classification {
    let mut strengths = Vec::new();
    let mut improvement_areas = Vec::new();

    for (category, &score) in scores {
        let name = tables.display_name(category);
        match CategoryStanding::from_score(score, tables.thresholds()) {
            CategoryStanding::Strength => strengths.push(format!("Strong {}", name)),
            CategoryStanding::NeedsImprovement => {
                improvement_areas.push(format!("{} optimization needed", name))
            }
            CategoryStanding::Adequate => {}
        }
    }

    if strengths.is_empty() {
        strengths.push(STRENGTHS_FALLBACK.to_string());
    }
    if improvement_areas.is_empty() {
        improvement_areas.push(IMPROVEMENTS_FALLBACK.to_string());
    }

    Classification {
        strengths,
        improvement_areas,
    }
}
