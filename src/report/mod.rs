pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{AssessmentReport, CategoryCard, OverallReadiness};
pub use generator::ReportGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
