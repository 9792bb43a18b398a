//! Shared data types for readiness scoring.
//!
//! Inputs arrive from the form-submission layer as `AssessmentResponse`
//! records; outputs are the `FarmProfile` and `Recommendation` value objects.
//! All of them serialize with camelCase field names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Assessment domain a question belongs to.
///
/// Variant order is the category iteration order used everywhere downstream
/// (profile maps, recommendation synthesis, report cards). Keys outside the six
/// known domains are kept verbatim in `Other` and sort after them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    FarmDesign,
    Technology,
    Processes,
    Organization,
    Yields,
    Crops,
    Other(String),
}

impl Category {
    /// The six assessed domains in iteration order
    pub const KNOWN: [Category; 6] = [
        Category::FarmDesign,
        Category::Technology,
        Category::Processes,
        Category::Organization,
        Category::Yields,
        Category::Crops,
    ];

    /// Parse a raw category key as submitted by the assessment form
    pub fn from_key(key: &str) -> Self {
        match key {
            "farmDesign" => Category::FarmDesign,
            "technology" => Category::Technology,
            "processes" => Category::Processes,
            "organization" => Category::Organization,
            "yields" => Category::Yields,
            "crops" => Category::Crops,
            other => Category::Other(other.to_string()),
        }
    }

    /// Raw key string, identical to what `from_key` accepts
    pub fn key(&self) -> &str {
        match self {
            Category::FarmDesign => "farmDesign",
            Category::Technology => "technology",
            Category::Processes => "processes",
            Category::Organization => "organization",
            Category::Yields => "yields",
            Category::Crops => "crops",
            Category::Other(key) => key,
        }
    }
}

impl From<String> for Category {
    fn from(key: String) -> Self {
        match Category::from_key(&key) {
            Category::Other(_) => Category::Other(key),
            known => known,
        }
    }
}

impl From<&str> for Category {
    fn from(key: &str) -> Self {
        Category::from_key(key)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(key) => key,
            known => known.key().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw answer value: a numeric rating or a categorical string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Number(i64),
    Text(String),
}

impl From<i64> for ResponseValue {
    fn from(value: i64) -> Self {
        ResponseValue::Number(value)
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        ResponseValue::Text(value.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        ResponseValue::Text(value)
    }
}

/// A single submitted answer.
///
/// `question_id` and `category` are validated by the submission handler before
/// they reach the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub question_id: String,
    pub value: ResponseValue,
    pub category: Category,
}

impl AssessmentResponse {
    pub fn new(
        question_id: impl Into<String>,
        value: impl Into<ResponseValue>,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            category: category.into(),
        }
    }
}

/// Aggregated maturity profile for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmProfile {
    /// Mean normalized score per category (only categories that were answered)
    pub scores: BTreeMap<Category, f64>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    /// Mean of category means
    pub overall_score: f64,
}

/// Three-level ordinal used for both priority and estimated impact.
///
/// Declaration order gives `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Ordinal on the {Low=1, Medium=2, High=3} scale
    pub fn ordinal(self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

/// Time horizon for acting on a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    Immediate,
    #[serde(rename = "Short-term")]
    ShortTerm,
    #[serde(rename = "Long-term")]
    LongTerm,
}

impl Timeframe {
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Immediate => "Immediate",
            Timeframe::ShortTerm => "Short-term",
            Timeframe::LongTerm => "Long-term",
        }
    }
}

/// A prioritized improvement suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Level,
    pub estimated_impact: Level,
    pub timeframe: Timeframe,
}
