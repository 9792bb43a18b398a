//! Category Aggregation
//!
//! Groups normalized scores by category and averages them. The overall score
//! is the mean of the category means, so a category with many questions
//! weighs the same as one with a single question. Categories with no
//! responses are absent from the result rather than scored as zero.

use crate::tables::ScoringTables;
use crate::types::{AssessmentResponse, Category};
use crate::utils::{mean, normalize_response};
use std::collections::BTreeMap;

/// Overall score reported when no responses were submitted
pub const EMPTY_OVERALL_SCORE: f64 = 0.0;

/// Per-category means plus the overall mean of means
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    pub scores: BTreeMap<Category, f64>,
    /// Number of responses behind each category mean
    pub response_counts: BTreeMap<Category, usize>,
    pub overall_score: f64,
}

impl CategoryAggregate {
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Normalize every response and aggregate by category
pub fn aggregate_scores<'a, I>(responses: I, tables: &ScoringTables) -> CategoryAggregate
where
    I: IntoIterator<Item = &'a AssessmentResponse>,
{
    let mut grouped: BTreeMap<Category, Vec<i64>> = BTreeMap::new();
    for response in responses {
        grouped
            .entry(response.category.clone())
            .or_default()
            .push(normalize_response(response, tables));
    }

    let mut scores = BTreeMap::new();
    let mut response_counts = BTreeMap::new();
    for (category, values) in grouped {
        // grouped only holds categories with at least one response
        if let Some(category_mean) = mean(values.iter().map(|&v| v as f64)) {
            response_counts.insert(category.clone(), values.len());
            scores.insert(category, category_mean);
        }
    }

    let overall_score = mean(scores.values().copied()).unwrap_or(EMPTY_OVERALL_SCORE);

    CategoryAggregate {
        scores,
        response_counts,
        overall_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn r(question_id: &str, value: i64, category: Category) -> AssessmentResponse {
        AssessmentResponse::new(question_id, value, category)
    }

    #[test]
    fn test_overall_is_mean_of_category_means() {
        let responses = vec![
            r("a1", 5, Category::FarmDesign),
            r("a2", 5, Category::FarmDesign),
            r("b1", 1, Category::Technology),
        ];
        let agg = aggregate_scores(&responses, ScoringTables::builtin());

        assert_abs_diff_eq!(agg.scores[&Category::FarmDesign], 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(agg.scores[&Category::Technology], 1.0, epsilon = 1e-9);
        // Not 11/3
        assert_abs_diff_eq!(agg.overall_score, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_absent_categories_are_excluded() {
        let responses = vec![r("y1", 2, Category::Yields), r("y2", 3, Category::Yields)];
        let agg = aggregate_scores(&responses, ScoringTables::builtin());

        assert_eq!(agg.scores.len(), 1);
        assert!(!agg.scores.contains_key(&Category::Crops));
        assert_abs_diff_eq!(agg.overall_score, 2.5, epsilon = 1e-9);
        assert_eq!(agg.response_counts[&Category::Yields], 2);
    }

    #[test]
    fn test_mixed_answer_kinds() {
        let responses = vec![
            AssessmentResponse::new("proc_sop", "Yes", Category::Processes),
            AssessmentResponse::new("proc_hygiene", "Ad hoc", Category::Processes),
            AssessmentResponse::new("proc_other", "Something else", Category::Processes),
        ];
        let agg = aggregate_scores(&responses, ScoringTables::builtin());

        // (5 + 1 + 3) / 3
        assert_abs_diff_eq!(agg.scores[&Category::Processes], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let responses: Vec<AssessmentResponse> = Vec::new();
        let agg = aggregate_scores(&responses, ScoringTables::builtin());

        assert!(agg.is_empty());
        assert!(agg.response_counts.is_empty());
        assert_eq!(agg.overall_score, EMPTY_OVERALL_SCORE);
        assert!(!agg.overall_score.is_nan());
    }

    #[test]
    fn test_unmapped_category_is_aggregated() {
        let other = Category::Other("aquaponics".to_string());
        let responses = vec![r("aq1", 4, other.clone()), r("t1", 2, Category::Technology)];
        let agg = aggregate_scores(&responses, ScoringTables::builtin());

        assert_abs_diff_eq!(agg.scores[&other], 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(agg.overall_score, 3.0, epsilon = 1e-9);
    }
}
