//! Farm Readiness Scorer
//!
//! Scores greenhouse farm readiness assessments and derives ranked improvement
//! recommendations.
//!
//! Pipeline, leaves first:
//! - `utils/`: response normalization (raw answer -> 1-5) and means
//! - `profile/`: category aggregation and strength/improvement classification
//! - `recommendations/`: rule-table synthesis and stable ranking
//! - `report/`: readiness report assembly with markdown/JSON formatters
//! - `tables/`: immutable scoring configuration (built-in or loaded from JSON)
//!
//! Scoring is synchronous and free of side effects; all lookup tables are
//! read-only after construction.

pub mod error;
pub mod types;
pub mod tables;
pub mod utils;
pub mod profile;
pub mod recommendations;
pub mod report;
pub mod scorer;

// Re-export commonly used types
pub use error::TableError;
pub use types::{AssessmentResponse, Category, FarmProfile, Level, Recommendation, ResponseValue, Timeframe};
pub use tables::{ScoringTables, Thresholds};
pub use utils::normalize_response;
pub use profile::{aggregate_scores, build_profile, classify_profile, CategoryAggregate};
pub use recommendations::{generate_recommendations, rank_recommendations, synthesize_recommendations};
pub use report::{AssessmentReport, JsonFormatter, MarkdownFormatter, ReportGenerator};
pub use scorer::ReadinessScorer;
