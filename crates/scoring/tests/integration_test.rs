//! Integration tests for the scoring engine.
//!
//! These tests rank whole catalogs, both a hand-built one and the bundled
//! data file, and check the ordering guarantees callers rely on.

use std::path::PathBuf;

use catalog::{BudgetCategory, Catalog, Destination, UserPreferences};
use scoring::ScoringEngine;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn destination(id: &str, budget: BudgetCategory, season: &str, activity: &str) -> Destination {
    Destination {
        id: id.to_string(),
        name: id.to_uppercase(),
        country: "India".to_string(),
        region: "Test".to_string(),
        description: format!("{id} description"),
        budget_category: budget,
        best_season: strings(&[season]),
        ideal_duration: strings(&["Medium"]),
        activities: strings(&[activity]),
        accommodation_types: strings(&["Hotel"]),
        cultural_tags: strings(&["History"]),
        travel_types: strings(&["Family"]),
        highlights: strings(&["Viewpoint"]),
        image: String::new(),
    }
}

fn beach_lover() -> UserPreferences {
    UserPreferences {
        budget: BudgetCategory::Low,
        duration: "Short".to_string(),
        season: "Winter".to_string(),
        travel_type: "Solo".to_string(),
        activities: strings(&["Beaches"]),
        accommodation: vec![],
        cultural: vec![],
    }
}

fn bundled_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/destinations.json");
    Catalog::load_from_file(&path).expect("bundled catalog must load")
}

/// A spread of preference sets covering every budget and season label
fn preference_grid() -> Vec<UserPreferences> {
    let mut grid = Vec::new();
    for budget in BudgetCategory::ALL {
        for season in ["Winter", "Summer", "Monsoon", "Anytime"] {
            for activities in [vec!["Beaches"], vec!["Mountains", "Trekking"], vec![]] {
                grid.push(UserPreferences {
                    budget,
                    duration: "Short".to_string(),
                    season: season.to_string(),
                    travel_type: "Couple".to_string(),
                    activities: strings(&activities),
                    accommodation: strings(&["Homestay"]),
                    cultural: strings(&["History", "Festivals"]),
                });
            }
        }
    }
    grid
}

#[test]
fn test_beach_destination_beats_mountain_destination() {
    let catalog = Catalog::from_destinations(vec![
        destination("peaks", BudgetCategory::High, "Summer", "Mountains"),
        destination("shore", BudgetCategory::Low, "Winter", "Beaches"),
    ])
    .unwrap();

    let results = ScoringEngine::standard().score(&beach_lover(), &catalog, 2);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].destination.id, "shore");
    assert_eq!(results[1].destination.id, "peaks");
    assert!(results[0].match_score > results[1].match_score);
}

#[test]
fn test_results_sorted_and_bounded_for_every_preference_set() {
    let catalog = bundled_catalog();
    let engine = ScoringEngine::standard();

    for preferences in preference_grid() {
        let results = engine.score(&preferences, &catalog, catalog.len());
        assert_eq!(results.len(), catalog.len());
        for pair in results.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        for result in &results {
            assert!(result.match_score <= 105);
            assert!(result.match_reasons.len() <= 3);
        }
    }
}

#[test]
fn test_ties_keep_catalog_order() {
    let catalog = Catalog::from_destinations(vec![
        destination("a", BudgetCategory::Medium, "Winter", "Beaches"),
        destination("low", BudgetCategory::High, "Summer", "Skiing"),
        destination("b", BudgetCategory::Medium, "Winter", "Beaches"),
        destination("c", BudgetCategory::Medium, "Winter", "Beaches"),
        destination("d", BudgetCategory::Medium, "Winter", "Beaches"),
    ])
    .unwrap();

    let results = ScoringEngine::standard().score(&beach_lover(), &catalog, 10);
    let ids: Vec<_> = results.iter().map(|r| r.destination.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "low"]);
}

#[test]
fn test_scoring_is_deterministic() {
    let catalog = bundled_catalog();
    let engine = ScoringEngine::standard();

    for preferences in preference_grid() {
        let first = engine.score(&preferences, &catalog, 5);
        let second = engine.score(&preferences, &catalog, 5);
        assert_eq!(first, second);
    }
}

#[test]
fn test_limit_truncates() {
    let catalog = bundled_catalog();
    let results = ScoringEngine::standard().score(&beach_lover(), &catalog, 3);
    assert_eq!(results.len(), 3);

    let none = ScoringEngine::standard().score(&beach_lover(), &catalog, 0);
    assert!(none.is_empty());
}

#[test]
fn test_empty_catalog_gives_empty_result() {
    let results = ScoringEngine::standard().score(&beach_lover(), &Catalog::default(), 5);
    assert!(results.is_empty());
}

#[test]
fn test_scored_destination_serializes_flat() {
    let catalog = bundled_catalog();
    let results = ScoringEngine::standard().score(&beach_lover(), &catalog, 1);
    let json = serde_json::to_value(&results[0]).unwrap();

    assert!(json.get("id").is_some());
    assert!(json.get("budgetCategory").is_some());
    assert!(json.get("matchScore").is_some());
    assert_eq!(json["source"], "Algorithmic");
    assert!(json.get("aiInsight").is_none());
}
