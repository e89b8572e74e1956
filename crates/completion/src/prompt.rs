//! Prompt construction for the three completion requests.

use catalog::{BudgetCategory, Destination, UserPreferences};
use serde::Serialize;

use crate::error::CompletionError;

/// The fields of a destination the model needs to rank it
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry<'a> {
    id: &'a str,
    name: &'a str,
    country: &'a str,
    region: &'a str,
    budget_category: BudgetCategory,
    best_season: &'a [String],
    ideal_duration: &'a [String],
    activities: &'a [String],
    accommodation_types: &'a [String],
    cultural_tags: &'a [String],
    travel_types: &'a [String],
    description: &'a str,
}

impl<'a> From<&'a Destination> for CatalogEntry<'a> {
    fn from(d: &'a Destination) -> Self {
        Self {
            id: &d.id,
            name: &d.name,
            country: &d.country,
            region: &d.region,
            budget_category: d.budget_category,
            best_season: &d.best_season,
            ideal_duration: &d.ideal_duration,
            activities: &d.activities,
            accommodation_types: &d.accommodation_types,
            cultural_tags: &d.cultural_tags,
            travel_types: &d.travel_types,
            description: &d.description,
        }
    }
}

fn preference_lines(preferences: &UserPreferences) -> String {
    format!(
        "- Budget: {}\n\
         - Duration: {}\n\
         - Season: {}\n\
         - Travel Type: {}\n\
         - Activities: {}\n\
         - Accommodation Preferences: {}\n\
         - Cultural Interests: {}",
        preferences.budget,
        preferences.duration,
        preferences.season,
        preferences.travel_type,
        preferences.activities.join(", "),
        preferences.accommodation.join(", "),
        preferences.cultural.join(", "),
    )
}

pub fn rank_prompt(
    preferences: &UserPreferences,
    destinations: &[Destination],
    limit: usize,
) -> Result<String, CompletionError> {
    let entries: Vec<CatalogEntry<'_>> = destinations.iter().map(CatalogEntry::from).collect();
    let catalog_json = serde_json::to_string_pretty(&entries)
        .map_err(|e| CompletionError::Encoding(e.to_string()))?;

    Ok(format!(
        "You are an experienced travel advisor. Rank the destinations below for this traveler.\n\
         \n\
         Traveler preferences:\n\
         {prefs}\n\
         \n\
         Destinations:\n\
         {catalog_json}\n\
         \n\
         Reply with a JSON array, best match first, of at most {limit} objects shaped like:\n\
         [\n  {{\n    \"destinationId\": \"id copied from the list above\",\n    \"matchScore\": 0-100,\n    \"matchReasons\": [\"reason\", \"reason\", \"reason\"],\n    \"aiInsight\": \"one sentence on why it suits this traveler\"\n  }}\n]\n\
         Reply with the JSON only: no prose and no Markdown.",
        prefs = preference_lines(preferences),
    ))
}

pub fn summary_prompt(destination: &Destination, preferences: &UserPreferences) -> String {
    format!(
        "You are a travel expert writing a personalized trip summary.\n\
         \n\
         Destination: {name}\n\
         - Description: {description}\n\
         - Best Season: {seasons}\n\
         - Budget Category: {budget}\n\
         - Ideal Duration: {durations}\n\
         - Activities: {activities}\n\
         - Accommodation Types: {accommodation}\n\
         - Cultural Tags: {cultural}\n\
         - Highlights: {highlights}\n\
         \n\
         Traveler preferences:\n\
         {prefs}\n\
         \n\
         Cover: why it fits this traveler, best time and length of stay, an estimated \
         budget range, activities, where to stay, cultural highlights, packing tips for \
         the season, must-see highlights and practical tips. Keep it friendly and upbeat.",
        name = destination.display_name(),
        description = destination.description,
        seasons = destination.best_season.join(", "),
        budget = destination.budget_category,
        durations = destination.ideal_duration.join(", "),
        activities = destination.activities.join(", "),
        accommodation = destination.accommodation_types.join(", "),
        cultural = destination.cultural_tags.join(", "),
        highlights = destination.highlights.join(", "),
        prefs = preference_lines(preferences),
    )
}

pub fn reasons_prompt(destination: &Destination, preferences: &UserPreferences) -> String {
    format!(
        "Give 3 short, one-sentence reasons why this destination suits the traveler.\n\
         \n\
         Destination: {name}\n\
         - Budget Category: {budget}\n\
         - Best Season: {seasons}\n\
         - Ideal Duration: {durations}\n\
         - Activities: {activities}\n\
         - Travel Types: {travel_types}\n\
         \n\
         Traveler preferences:\n\
         - Budget: {pref_budget}\n\
         - Duration: {pref_duration}\n\
         - Season: {pref_season}\n\
         - Travel Type: {pref_travel}\n\
         - Activities: {pref_activities}\n\
         \n\
         Reply with a JSON array of 3 strings only, e.g. [\"Reason 1\", \"Reason 2\", \"Reason 3\"].",
        name = destination.display_name(),
        budget = destination.budget_category,
        seasons = destination.best_season.join(", "),
        durations = destination.ideal_duration.join(", "),
        activities = destination.activities.join(", "),
        travel_types = destination.travel_types.join(", "),
        pref_budget = preferences.budget,
        pref_duration = preferences.duration,
        pref_season = preferences.season,
        pref_travel = preferences.travel_type,
        pref_activities = preferences.activities.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::BudgetCategory;

    fn sample() -> (Destination, UserPreferences) {
        let s = |v: &[&str]| v.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        let destination = Destination {
            id: "hampi".to_string(),
            name: "Hampi".to_string(),
            country: "India".to_string(),
            region: "South India".to_string(),
            description: "Ruins".to_string(),
            budget_category: BudgetCategory::Low,
            best_season: s(&["Winter"]),
            ideal_duration: s(&["Short"]),
            activities: s(&["Sightseeing", "Trekking"]),
            accommodation_types: s(&["Guesthouse"]),
            cultural_tags: s(&["History"]),
            travel_types: s(&["Solo"]),
            highlights: s(&["Virupaksha Temple"]),
            image: String::new(),
        };
        let preferences = UserPreferences {
            budget: BudgetCategory::Low,
            duration: "Short".to_string(),
            season: "Winter".to_string(),
            travel_type: "Solo".to_string(),
            activities: s(&["Trekking", "Photography"]),
            accommodation: vec![],
            cultural: s(&["History"]),
        };
        (destination, preferences)
    }

    #[test]
    fn test_rank_prompt_embeds_catalog_and_limit() {
        let (destination, preferences) = sample();
        let prompt = rank_prompt(&preferences, std::slice::from_ref(&destination), 4).unwrap();

        assert!(prompt.contains("\"id\": \"hampi\""));
        assert!(prompt.contains("\"budgetCategory\": \"Low\""));
        assert!(prompt.contains("at most 4 objects"));
        assert!(prompt.contains("- Activities: Trekking, Photography"));
        // highlights are not part of the ranking payload
        assert!(!prompt.contains("Virupaksha"));
    }

    #[test]
    fn test_summary_prompt_mentions_destination() {
        let (destination, preferences) = sample();
        let prompt = summary_prompt(&destination, &preferences);
        assert!(prompt.contains("Destination: Hampi, India"));
        assert!(prompt.contains("Highlights: Virupaksha Temple"));
        assert!(prompt.contains("- Cultural Interests: History"));
    }

    #[test]
    fn test_reasons_prompt_asks_for_json_array() {
        let (destination, preferences) = sample();
        let prompt = reasons_prompt(&destination, &preferences);
        assert!(prompt.contains("JSON array of 3 strings"));
        assert!(prompt.contains("- Travel Types: Solo"));
    }
}
