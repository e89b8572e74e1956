//! Benchmarks for catalog scoring
//!
//! Run with: cargo bench --package scoring

use catalog::{BudgetCategory, Catalog, UserPreferences};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scoring::ScoringEngine;
use std::path::Path;

fn load_test_catalog() -> Catalog {
    let path = Path::new("../../data/destinations.json");
    Catalog::load_from_file(path).expect("Failed to load test catalog")
}

fn sample_preferences() -> UserPreferences {
    UserPreferences {
        budget: BudgetCategory::Medium,
        duration: "Short".to_string(),
        season: "Winter".to_string(),
        travel_type: "Couple".to_string(),
        activities: vec!["Sightseeing".to_string(), "Beaches".to_string()],
        accommodation: vec!["Heritage Hotel".to_string()],
        cultural: vec!["History".to_string()],
    }
}

fn bench_score_catalog(c: &mut Criterion) {
    let catalog = load_test_catalog();
    let engine = ScoringEngine::standard();
    let preferences = sample_preferences();

    c.bench_function("score_catalog", |b| {
        b.iter(|| {
            let results = engine.score(black_box(&preferences), black_box(&catalog), black_box(6));
            black_box(results)
        })
    });
}

fn bench_score_one(c: &mut Criterion) {
    let catalog = load_test_catalog();
    let engine = ScoringEngine::standard();
    let preferences = sample_preferences();
    let destination = &catalog.destinations()[0];

    c.bench_function("score_one", |b| {
        b.iter(|| black_box(engine.score_one(black_box(destination), black_box(&preferences))))
    });
}

criterion_group!(benches, bench_score_catalog, bench_score_one);
criterion_main!(benches);
