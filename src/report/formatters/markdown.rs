use crate::report::types::AssessmentReport;

/// Markdown formatter for readiness reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &AssessmentReport) -> String {
        let mut md = String::with_capacity(2048);

        // Title with stars and score
        md.push_str(&format!(
            "# {} - {}\n\n",
            report.overall.stars, report.overall.label
        ));
        md.push_str(&format!(
            "**Overall Score:** {:.1}/5\n\n",
            report.overall.score
        ));
        md.push_str(&format!("{}\n\n", report.overall.message));

        // Category scores
        if !report.categories.is_empty() {
            md.push_str("## Category Scores\n\n");
            md.push_str("| Category | Score | Responses | Assessment |\n");
            md.push_str("|----------|-------|-----------|------------|\n");
            for card in &report.categories {
                md.push_str(&format!(
                    "| {} | {:.1} | {} | {} |\n",
                    card.display_name, card.score, card.response_count, card.interpretation
                ));
            }
            md.push('\n');
        }

        md.push_str("## Strengths\n\n");
        for strength in &report.strengths {
            md.push_str(&format!("- {}\n", strength));
        }
        md.push('\n');

        md.push_str("## Areas for Improvement\n\n");
        for area in &report.improvement_areas {
            md.push_str(&format!("- {}\n", area));
        }
        md.push('\n');

        if !report.recommendations.is_empty() {
            md.push_str("## Recommendations\n\n");
            for (i, rec) in report.recommendations.iter().enumerate() {
                md.push_str(&format!("### {}. {}\n\n", i + 1, rec.title));
                md.push_str(&format!(
                    "*Priority:* {} | *Impact:* {} | *Timeframe:* {}\n\n",
                    rec.priority.label(),
                    rec.estimated_impact.label(),
                    rec.timeframe.label()
                ));
                md.push_str(&format!("{}\n\n", rec.description));
            }
        }

        md
    }
}
