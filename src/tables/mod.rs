//! Scoring Tables
//!
//! Read-only configuration consulted by every pipeline stage:
//! - answer scores: `(question_id, literal answer) -> 1-5`
//! - category display names
//! - per-category recommendation rules, as ordered `(condition, template)` lists
//! - the cross-cutting comprehensive-plan template
//! - classification thresholds
//!
//! The built-in catalog is constructed once on first use and shared as
//! `&'static ScoringTables`. Custom tables can be loaded from JSON and are
//! validated before use.

mod catalog;

use crate::error::TableError;
use crate::types::{Category, Level, Recommendation, Timeframe};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Category mean at or above which the category is a strength (inclusive)
pub const STRENGTH_THRESHOLD: f64 = 4.0;

/// Category mean at or below which the category needs improvement (inclusive)
pub const IMPROVEMENT_THRESHOLD: f64 = 2.5;

/// Category mean at or below which recommendation rules are consulted
pub const RECOMMENDATION_THRESHOLD: f64 = 3.0;

/// Overall score at or below which the comprehensive plan is added
pub const COMPREHENSIVE_PLAN_THRESHOLD: f64 = 2.5;

/// Rule lists hold one or two rules per category
pub type RuleList = SmallVec<[RecommendationRule; 2]>;

/// Classification and synthesis cut-offs on the 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub strength: f64,
    pub improvement: f64,
    pub recommendation: f64,
    pub comprehensive_plan: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            strength: STRENGTH_THRESHOLD,
            improvement: IMPROVEMENT_THRESHOLD,
            recommendation: RECOMMENDATION_THRESHOLD,
            comprehensive_plan: COMPREHENSIVE_PLAN_THRESHOLD,
        }
    }
}

/// Predicate on a category mean deciding whether a rule fires
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "score", rename_all = "snake_case")]
pub enum ScoreCondition {
    Always,
    AtMost(f64),
    Below(f64),
}

impl ScoreCondition {
    pub fn holds(&self, score: f64) -> bool {
        match *self {
            ScoreCondition::Always => true,
            ScoreCondition::AtMost(limit) => score <= limit,
            ScoreCondition::Below(limit) => score < limit,
        }
    }
}

/// Recommendation content without a category; the rule's key supplies it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTemplate {
    pub title: String,
    pub description: String,
    pub priority: Level,
    pub estimated_impact: Level,
    pub timeframe: Timeframe,
}

impl RecommendationTemplate {
    /// Instantiate a fresh recommendation for `category`
    pub fn instantiate(&self, category: Category) -> Recommendation {
        Recommendation {
            title: self.title.clone(),
            description: self.description.clone(),
            category,
            priority: self.priority,
            estimated_impact: self.estimated_impact,
            timeframe: self.timeframe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub condition: ScoreCondition,
    pub template: RecommendationTemplate,
}

/// Complete scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringTables {
    #[serde(default)]
    answer_scores: FxHashMap<String, FxHashMap<String, i64>>,
    #[serde(default)]
    display_names: BTreeMap<Category, String>,
    #[serde(default)]
    rules: BTreeMap<Category, RuleList>,
    #[serde(default)]
    comprehensive_plan: Option<RecommendationTemplate>,
    #[serde(default)]
    thresholds: Thresholds,
}

static BUILTIN: OnceLock<ScoringTables> = OnceLock::new();

impl ScoringTables {
    /// Shared built-in catalog, constructed on first call
    pub fn builtin() -> &'static ScoringTables {
        BUILTIN.get_or_init(Self::from_catalog)
    }

    fn from_catalog() -> Self {
        let answer_scores = catalog::ANSWER_SCORES
            .iter()
            .map(|spec| {
                let answers = spec
                    .answers
                    .iter()
                    .map(|(value, score)| (value.to_string(), *score))
                    .collect();
                (spec.question_id.to_string(), answers)
            })
            .collect();

        let display_names = catalog::DISPLAY_NAMES
            .iter()
            .map(|(category, name)| (category.clone(), name.to_string()))
            .collect();

        let rules = catalog::RULES
            .iter()
            .map(|(category, specs)| {
                let list = specs
                    .iter()
                    .map(|spec| RecommendationRule {
                        condition: spec.condition,
                        template: template_from_spec(&spec.template),
                    })
                    .collect();
                (category.clone(), list)
            })
            .collect();

        Self {
            answer_scores,
            display_names,
            rules,
            comprehensive_plan: Some(template_from_spec(&catalog::COMPREHENSIVE_PLAN)),
            thresholds: Thresholds::default(),
        }
    }

    /// Parse and validate a table file's contents
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let tables: ScoringTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load scoring tables from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring tables: {:?}", path))?;

        let tables = Self::from_json(&contents)
            .with_context(|| format!("Invalid scoring tables in {:?}", path))?;

        tracing::info!(
            questions = tables.answer_scores.len(),
            rule_categories = tables.rules.len(),
            "Loaded scoring tables from {:?}",
            path
        );

        Ok(tables)
    }

    /// Check scores and thresholds are on the 1-5 scale and rule lists are usable
    pub fn validate(&self) -> Result<(), TableError> {
        for (question_id, answers) in &self.answer_scores {
            for (value, &score) in answers {
                if !(1..=5).contains(&score) {
                    return Err(TableError::AnswerScoreOutOfRange {
                        question_id: question_id.clone(),
                        value: value.clone(),
                        score,
                    });
                }
            }
        }

        let t = &self.thresholds;
        for (name, value) in [
            ("strength", t.strength),
            ("improvement", t.improvement),
            ("recommendation", t.recommendation),
            ("comprehensive_plan", t.comprehensive_plan),
        ] {
            if !value.is_finite() || !(0.0..=5.0).contains(&value) {
                return Err(TableError::InvalidThreshold { name, value });
            }
        }
        if t.improvement >= t.strength {
            return Err(TableError::OverlappingThresholds {
                improvement: t.improvement,
                strength: t.strength,
            });
        }

        for (category, list) in &self.rules {
            if list.is_empty() {
                return Err(TableError::EmptyRuleList(category.key().to_string()));
            }
            if !self.display_names.contains_key(category) {
                tracing::warn!(
                    category = category.key(),
                    "Rule list for category without a display name"
                );
            }
        }

        Ok(())
    }

    /// Score for a categorical answer, if the catalog knows it
    pub fn answer_score(&self, question_id: &str, value: &str) -> Option<i64> {
        self.answer_scores.get(question_id)?.get(value).copied()
    }

    /// Display name for a category; unmapped categories use their raw key
    pub fn display_name<'a>(&'a self, category: &'a Category) -> &'a str {
        self.display_names
            .get(category)
            .map(String::as_str)
            .unwrap_or_else(|| category.key())
    }

    /// Ordered rules for a category (empty when none are configured)
    pub fn rules_for(&self, category: &Category) -> &[RecommendationRule] {
        self.rules.get(category).map(|list| list.as_slice()).unwrap_or(&[])
    }

    pub fn comprehensive_plan(&self) -> Option<&RecommendationTemplate> {
        self.comprehensive_plan.as_ref()
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}

fn template_from_spec(spec: &catalog::TemplateSpec) -> RecommendationTemplate {
    RecommendationTemplate {
        title: spec.title.to_string(),
        description: spec.description.to_string(),
        priority: spec.priority,
        estimated_impact: spec.impact,
        timeframe: spec.timeframe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        ScoringTables::builtin().validate().unwrap();
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = ScoringTables::builtin() as *const ScoringTables;
        let b = ScoringTables::builtin() as *const ScoringTables;
        assert_eq!(a, b);
    }

    #[test]
    fn test_builtin_has_rules_for_every_category() {
        let tables = ScoringTables::builtin();
        for category in Category::KNOWN {
            let rules = tables.rules_for(&category);
            assert!(
                (1..=2).contains(&rules.len()),
                "{} has {} rules",
                category,
                rules.len()
            );
            assert_eq!(rules[0].condition, ScoreCondition::Always);
        }
    }

    #[test]
    fn test_answer_score_lookup() {
        let tables = ScoringTables::builtin();
        assert_eq!(tables.answer_score("fd_structure_type", "Glass greenhouse"), Some(5));
        assert_eq!(tables.answer_score("fd_structure_type", "glass greenhouse"), None);
        assert_eq!(tables.answer_score("unknown_question", "Glass greenhouse"), None);
    }

    #[test]
    fn test_display_name_falls_back_to_key() {
        let tables = ScoringTables::builtin();
        assert_eq!(tables.display_name(&Category::FarmDesign), "Farm Design");
        let other = Category::Other("aquaponics".to_string());
        assert_eq!(tables.display_name(&other), "aquaponics");
    }

    #[test]
    fn test_score_conditions() {
        assert!(ScoreCondition::Always.holds(5.0));
        assert!(ScoreCondition::AtMost(2.0).holds(2.0));
        assert!(!ScoreCondition::AtMost(2.0).holds(2.01));
        assert!(!ScoreCondition::Below(2.0).holds(2.0));
        assert!(ScoreCondition::Below(2.0).holds(1.99));
    }

    #[test]
    fn test_from_json_minimal_uses_default_thresholds() {
        let tables = ScoringTables::from_json(
            r#"{
                "answer_scores": {"q1": {"Good": 4}},
                "display_names": {"technology": "Tech"},
                "rules": {
                    "technology": [{
                        "condition": {"kind": "at_most", "score": 2.0},
                        "template": {
                            "title": "Automate",
                            "description": "Add controllers",
                            "priority": "High",
                            "estimated_impact": "Low",
                            "timeframe": "Short-term"
                        }
                    }]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(tables.answer_score("q1", "Good"), Some(4));
        assert_eq!(tables.display_name(&Category::Technology), "Tech");
        assert_eq!(*tables.thresholds(), Thresholds::default());
        assert!(tables.comprehensive_plan().is_none());
        let rules = tables.rules_for(&Category::Technology);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].condition, ScoreCondition::AtMost(2.0));
        assert_eq!(rules[0].template.timeframe, Timeframe::ShortTerm);
    }

    #[test]
    fn test_from_json_rejects_out_of_range_score() {
        let err = ScoringTables::from_json(r#"{"answer_scores": {"q1": {"Great": 7}}}"#)
            .unwrap_err();
        assert!(matches!(err, TableError::AnswerScoreOutOfRange { score: 7, .. }));
    }

    #[test]
    fn test_from_json_rejects_overlapping_thresholds() {
        let err = ScoringTables::from_json(
            r#"{"thresholds": {"strength": 2.0, "improvement": 3.0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TableError::OverlappingThresholds { .. }));
    }

    #[test]
    fn test_from_json_rejects_empty_rule_list() {
        let err = ScoringTables::from_json(r#"{"rules": {"crops": []}}"#).unwrap_err();
        assert!(matches!(err, TableError::EmptyRuleList(ref key) if key == "crops"));
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        let err = ScoringTables::from_json("{not json").unwrap_err();
        assert!(matches!(err, TableError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = ScoringTables::load(Path::new("/nonexistent/tables.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read scoring tables"));
    }
}
