//! Readiness Scorer - Main coordinator for scoring farm assessments
//!
//! Runs the full pipeline over one submission:
//! responses -> normalized scores -> category profile -> candidate
//! recommendations -> ranked recommendations -> report.
//!
//! The scorer only borrows its tables, so one instance (or many) can be shared
//! freely across threads. `assess_batch` fans independent submissions out over
//! the Rayon pool.

use crate::profile::{aggregate_scores, profile_from_aggregate};
use crate::recommendations::generate_recommendations;
use crate::report::{AssessmentReport, ReportGenerator};
use crate::tables::ScoringTables;
use crate::types::{AssessmentResponse, FarmProfile, Recommendation};
use rayon::prelude::*;
use std::time::Instant;

/// Main readiness scorer
#[derive(Debug, Clone, Copy)]
pub struct ReadinessScorer<'t> {
    tables: &'t ScoringTables,
}

impl Default for ReadinessScorer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessScorer<'static> {
    /// Scorer over the built-in question catalog and rule table
    pub fn new() -> Self {
        Self {
            tables: ScoringTables::builtin(),
        }
    }
}

impl<'t> ReadinessScorer<'t> {
    /// Scorer over custom tables
    pub fn with_tables(tables: &'t ScoringTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t ScoringTables {
        self.tables
    }

    /// Normalize, aggregate and classify a response set
    pub fn build_profile<'a, I>(&self, responses: I) -> FarmProfile
    where
        I: IntoIterator<Item = &'a AssessmentResponse>,
    {
        crate::profile::build_profile(responses, self.tables)
    }

    /// Ranked recommendations for a profile.
    ///
    /// Rules are consulted by score only, so the raw responses are not needed.
    pub fn generate_recommendations(&self, profile: &FarmProfile) -> Vec<Recommendation> {
        generate_recommendations(profile, self.tables)
    }

    /// Run the full pipeline and assemble a report
    pub fn assess<'a, I>(&self, responses: I) -> AssessmentReport
    where
        I: IntoIterator<Item = &'a AssessmentResponse>,
    {
        let start = Instant::now();

        let aggregate = aggregate_scores(responses, self.tables);
        let profile = profile_from_aggregate(&aggregate, self.tables);
        let t_profile = start.elapsed();

        let recommendations = generate_recommendations(&profile, self.tables);
        let t_total = start.elapsed();

        tracing::debug!(
            categories = profile.scores.len(),
            overall_score = profile.overall_score,
            recommendations = recommendations.len(),
            "Assessment timing (µs): profile={}, total={}",
            t_profile.as_micros(),
            t_total.as_micros(),
        );

        ReportGenerator::generate(&profile, &aggregate, recommendations, self.tables)
    }

    /// Assess many independent submissions in parallel. Output order matches input.
    pub fn assess_batch(&self, submissions: &[Vec<AssessmentResponse>]) -> Vec<AssessmentReport> {
        let start = Instant::now();

        let reports: Vec<AssessmentReport> = submissions
            .par_iter()
            .map(|responses| self.assess(responses))
            .collect();

        tracing::info!(
            submissions = submissions.len(),
            "Batch assessment completed in {:.1} ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        reports
    }
}
