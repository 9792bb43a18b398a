use criterion::{black_box, criterion_group, criterion_main, Criterion};
use farm_readiness_scorer::{AssessmentResponse, Category, ReadinessScorer};

fn full_submission() -> Vec<AssessmentResponse> {
    vec![
        AssessmentResponse::new("fd_structure_type", "Polycarbonate greenhouse", Category::FarmDesign),
        AssessmentResponse::new("fd_ventilation", "Side vents only", Category::FarmDesign),
        AssessmentResponse::new("fd_layout_efficiency", "Some bottlenecks", Category::FarmDesign),
        AssessmentResponse::new("tech_climate_control", "Partially automated", Category::Technology),
        AssessmentResponse::new("tech_irrigation", "Drip irrigation", Category::Technology),
        AssessmentResponse::new("tech_sensors", "No", Category::Technology),
        AssessmentResponse::new("proc_pest_management", "Scheduled spraying", Category::Processes),
        AssessmentResponse::new("proc_record_keeping", "Paper logbook", Category::Processes),
        AssessmentResponse::new("org_staffing", "Owner only", Category::Organization),
        AssessmentResponse::new("org_training", "Occasional", Category::Organization),
        AssessmentResponse::new("yld_vs_benchmark", "Well below benchmark", Category::Yields),
        AssessmentResponse::new("yld_tracking", "Monthly totals", Category::Yields),
        AssessmentResponse::new("crop_variety_selection", "Supplier recommendation", Category::Crops),
        AssessmentResponse::new("crop_rotation", "Yes", Category::Crops),
    ]
}

fn bench_single_assessment(c: &mut Criterion) {
    let scorer = ReadinessScorer::new();
    let responses = full_submission();

    c.bench_function("build_profile", |b| {
        b.iter(|| scorer.build_profile(black_box(&responses)))
    });

    let profile = scorer.build_profile(&responses);
    c.bench_function("generate_recommendations", |b| {
        b.iter(|| scorer.generate_recommendations(black_box(&profile)))
    });

    c.bench_function("assess", |b| b.iter(|| scorer.assess(black_box(&responses))));
}

fn bench_batch(c: &mut Criterion) {
    let scorer = ReadinessScorer::new();
    let submissions: Vec<_> = (0..256).map(|_| full_submission()).collect();

    c.bench_function("assess_batch_256", |b| {
        b.iter(|| scorer.assess_batch(black_box(&submissions)))
    });
}

criterion_group!(benches, bench_single_assessment, bench_batch);
criterion_main!(benches);
