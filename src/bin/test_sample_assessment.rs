//! Score three sample farm assessments and print their reports
//!
//! Samples:
//! - Established Glasshouse: strong design and technology, weak yields tracking
//! - Starter Tunnel: low scores across the board (triggers the comprehensive plan)
//! - Mixed Operation: middle-of-the-road answers, including an unrecognized one
//!
//! Set SCORING_TABLES to a JSON table file to score against custom tables.
//! Set REPORT_FORMAT=json for JSON output instead of markdown.

use anyhow::Result;
use farm_readiness_scorer::{
    AssessmentResponse, Category, JsonFormatter, MarkdownFormatter, ReadinessScorer, ScoringTables,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_readiness_scorer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let custom_tables = match std::env::var("SCORING_TABLES") {
        Ok(path) => Some(ScoringTables::load(&PathBuf::from(path))?),
        Err(_) => None,
    };
    let scorer = match &custom_tables {
        Some(tables) => ReadinessScorer::with_tables(tables),
        None => ReadinessScorer::new(),
    };
    let as_json = std::env::var("REPORT_FORMAT").map(|f| f == "json").unwrap_or(false);

    let samples = vec![
        (
            "Established Glasshouse",
            vec![
                AssessmentResponse::new("fd_structure_type", "Glass greenhouse", Category::FarmDesign),
                AssessmentResponse::new("fd_ventilation", "Automated roof and side vents", Category::FarmDesign),
                AssessmentResponse::new("tech_climate_control", "Fully automated", Category::Technology),
                AssessmentResponse::new("tech_irrigation", "Automated fertigation", Category::Technology),
                AssessmentResponse::new("proc_record_keeping", "Spreadsheets", Category::Processes),
                AssessmentResponse::new("org_training", "Regular on-the-job", Category::Organization),
                AssessmentResponse::new("yld_tracking", "Seasonal totals", Category::Yields),
                AssessmentResponse::new("yld_vs_benchmark", "Unknown", Category::Yields),
                AssessmentResponse::new("crop_planning", "Fixed seasonal plan", Category::Crops),
            ],
        ),
        (
            "Starter Tunnel",
            vec![
                AssessmentResponse::new("fd_structure_type", "Plastic tunnel", Category::FarmDesign),
                AssessmentResponse::new("fd_ventilation", "Doors only", Category::FarmDesign),
                AssessmentResponse::new("tech_climate_control", "Manual", Category::Technology),
                AssessmentResponse::new("tech_sensors", "No", Category::Technology),
                AssessmentResponse::new("proc_pest_management", "Reactive spraying", Category::Processes),
                AssessmentResponse::new("org_planning_horizon", "Week to week", Category::Organization),
                AssessmentResponse::new("yld_tracking", "Not tracked", Category::Yields),
                AssessmentResponse::new("crop_variety_selection", "Tradition", Category::Crops),
            ],
        ),
        (
            "Mixed Operation",
            vec![
                AssessmentResponse::new("fd_growing_system", "Raised soil beds", Category::FarmDesign),
                AssessmentResponse::new("tech_monitoring", "Handheld meters", Category::Technology),
                AssessmentResponse::new("tech_energy_source", "Biogas", Category::Technology),
                AssessmentResponse::new("proc_sop", "Yes", Category::Processes),
                AssessmentResponse::new("proc_hygiene", "Routine cleaning", Category::Processes),
                AssessmentResponse::new("org_staffing", "Dedicated grower", Category::Organization),
                AssessmentResponse::new("yld_post_harvest_loss", "10-20%", Category::Yields),
                AssessmentResponse::new("crop_rating", 4, Category::Crops),
            ],
        ),
    ];

    for (name, responses) in &samples {
        let start = Instant::now();
        let report = scorer.assess(responses);
        let elapsed = start.elapsed();

        println!("{}", "=".repeat(72));
        println!("{} ({} responses, {:.3} ms)", name, responses.len(), elapsed.as_secs_f64() * 1000.0);
        println!("{}\n", "=".repeat(72));

        if as_json {
            println!("{}\n", JsonFormatter::format(&report)?);
        } else {
            println!("{}", MarkdownFormatter::format(&report));
        }
    }

    let submissions: Vec<Vec<AssessmentResponse>> = samples.into_iter().map(|(_, r)| r).collect();
    let reports = scorer.assess_batch(&submissions);
    println!("Batch scores:");
    for report in &reports {
        println!("  {:.2} {} ({})", report.overall.score, report.overall.stars, report.overall.label);
    }

    Ok(())
}
