use crate::report::types::AssessmentReport;

/// JSON formatter for readiness reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &AssessmentReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &AssessmentReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::*;

    fn empty_report() -> AssessmentReport {
        AssessmentReport {
            overall: OverallReadiness {
                score: 0.0,
                stars: "☆☆☆☆☆".to_string(),
                label: "Not assessed".to_string(),
                message: "No responses were submitted".to_string(),
            },
            categories: vec![],
            strengths: vec!["Building foundational capabilities".to_string()],
            improvement_areas: vec!["Continue optimizing current operations".to_string()],
            recommendations: vec![],
        }
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&empty_report()).unwrap();

        assert!(json.contains("\"score\": 0.0"));
        assert!(json.contains("\"label\": \"Not assessed\""));
        assert!(json.contains("\"categories\": []"));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&empty_report()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));

        let parsed: AssessmentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, empty_report());
    }
}
