use crate::profile::{CategoryAggregate, CategoryStanding};
use crate::report::types::*;
use crate::tables::ScoringTables;
use crate::types::{FarmProfile, Recommendation};

/// Assembles the readiness report from pipeline outputs
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generate the report
    ///
    /// Takes:
    /// - profile: classified farm profile
    /// - aggregate: category means with response counts (from the same responses)
    /// - recommendations: ranked recommendations for the profile
    pub fn generate(
        profile: &FarmProfile,
        aggregate: &CategoryAggregate,
        recommendations: Vec<Recommendation>,
        tables: &ScoringTables,
    ) -> AssessmentReport {
        let overall = Self::generate_overall(profile.overall_score, profile.scores.len());

        let categories = profile
            .scores
            .iter()
            .map(|(category, &score)| {
                let standing = CategoryStanding::from_score(score, tables.thresholds());
                CategoryCard {
                    category: category.clone(),
                    display_name: tables.display_name(category).to_string(),
                    score,
                    response_count: aggregate.response_counts.get(category).copied().unwrap_or(0),
                    standing,
                    interpretation: standing.display_text().to_string(),
                }
            })
            .collect();

        AssessmentReport {
            overall,
            categories,
            strengths: profile.strengths.clone(),
            improvement_areas: profile.improvement_areas.clone(),
            recommendations,
        }
    }

    /// Overall readiness with stars; an empty profile is reported as not assessed
    fn generate_overall(score: f64, scored_categories: usize) -> OverallReadiness {
        let (stars, label) = match score {
            _ if scored_categories == 0 => ("☆☆☆☆☆", "Not assessed"),
            s if s >= 4.5 => ("★★★★★", "Leading"),
            s if s >= 3.5 => ("★★★★☆", "Advanced"),
            s if s >= 2.5 => ("★★★☆☆", "Established"),
            s if s >= 1.5 => ("★★☆☆☆", "Developing"),
            _ => ("★☆☆☆☆", "Emerging"),
        };

        let message = if scored_categories == 0 {
            "No responses were submitted".to_string()
        } else {
            format!(
                "Overall readiness: {:.1}/5 across {} categor{}",
                score,
                scored_categories,
                if scored_categories == 1 { "y" } else { "ies" }
            )
        };

        OverallReadiness {
            score,
            stars: stars.to_string(),
            label: label.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{aggregate_scores, profile_from_aggregate};
    use crate::types::{AssessmentResponse, Category};

    #[test]
    fn test_generate_overall_leading() {
        let overall = ReportGenerator::generate_overall(4.8, 6);
        assert_eq!(overall.stars, "★★★★★");
        assert_eq!(overall.label, "Leading");
        assert_eq!(overall.message, "Overall readiness: 4.8/5 across 6 categories");
    }

    #[test]
    fn test_generate_overall_bands() {
        assert_eq!(ReportGenerator::generate_overall(3.5, 2).label, "Advanced");
        assert_eq!(ReportGenerator::generate_overall(2.5, 2).label, "Established");
        assert_eq!(ReportGenerator::generate_overall(1.5, 2).label, "Developing");
        assert_eq!(ReportGenerator::generate_overall(1.0, 1).label, "Emerging");
        assert_eq!(
            ReportGenerator::generate_overall(1.0, 1).message,
            "Overall readiness: 1.0/5 across 1 category"
        );
    }

    #[test]
    fn test_generate_overall_not_assessed() {
        let overall = ReportGenerator::generate_overall(0.0, 0);
        assert_eq!(overall.label, "Not assessed");
        assert_eq!(overall.stars, "☆☆☆☆☆");
    }

    #[test]
    fn test_category_cards() {
        let tables = ScoringTables::builtin();
        let responses = vec![
            AssessmentResponse::new("org_roles", "Yes", Category::Organization),
            AssessmentResponse::new("org_training", "Structured program", Category::Organization),
            AssessmentResponse::new("fd_ventilation", "None", Category::FarmDesign),
        ];
        let aggregate = aggregate_scores(&responses, tables);
        let profile = profile_from_aggregate(&aggregate, tables);

        let report = ReportGenerator::generate(&profile, &aggregate, vec![], tables);

        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories[0].category, Category::FarmDesign);
        assert_eq!(report.categories[0].display_name, "Farm Design");
        assert_eq!(report.categories[0].response_count, 1);
        assert_eq!(report.categories[0].standing, CategoryStanding::NeedsImprovement);
        assert_eq!(report.categories[1].response_count, 2);
        assert_eq!(report.categories[1].interpretation, "Strength");
        assert_eq!(report.strengths, profile.strengths);
    }
}
