//! Deterministic trip summaries.
//!
//! Used whenever the completion service is unavailable. The text depends only
//! on the destination record, so the same destination always produces the
//! same bytes.

use catalog::Destination;

const BEACH_PACKING: &str = "Pack sunscreen, swimwear, and light cotton clothes.";
const MOUNTAIN_PACKING: &str = "Pack warm layers, sturdy shoes, and rain gear.";
const GENERIC_PACKING: &str = "Pack comfortable walking shoes and weather-appropriate clothing.";
const TRAVEL_TIP: &str = "Book accommodations in advance during peak season and always carry local currency for small vendors.";

/// Packing advice keyed off the destination's activities
pub fn packing_tip(destination: &Destination) -> &'static str {
    if destination.has_activity("Beaches") {
        BEACH_PACKING
    } else if destination.has_activity("Mountains") {
        MOUNTAIN_PACKING
    } else {
        GENERIC_PACKING
    }
}

fn first_n(items: &[String], n: usize, separator: &str) -> String {
    items.iter().take(n).map(String::as_str).collect::<Vec<_>>().join(separator)
}

fn bullets<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines
        .into_iter()
        .map(|line| format!("• {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the template summary from the catalog record alone.
pub fn template_summary(destination: &Destination) -> String {
    let overview = [
        format!("Best time to visit: {}", destination.best_season.join(" or ")),
        format!(
            "Recommended duration: {}",
            destination
                .ideal_duration
                .first()
                .map(String::as_str)
                .unwrap_or("Flexible")
        ),
        format!(
            "Estimated budget: {} per person",
            destination.budget_category.estimated_range()
        ),
        format!("Top activities: {}", first_n(&destination.activities, 3, ", ")),
        format!("Stay options: {}", first_n(&destination.accommodation_types, 2, " or ")),
        format!("Cultural highlights: {}", first_n(&destination.cultural_tags, 2, ", ")),
    ];

    let sections = [
        format!("🌍 **{}**", destination.display_name()),
        destination.description.clone(),
        format!(
            "📋 **Trip Overview:**\n{}",
            bullets(overview.iter().map(String::as_str))
        ),
        format!("🎒 **Packing Tip:**\n{}", packing_tip(destination)),
        format!(
            "✨ **Must-See Highlights:**\n{}",
            bullets(destination.highlights.iter().map(String::as_str))
        ),
        format!("💡 **Travel Tip:** {TRAVEL_TIP}"),
    ];

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::BudgetCategory;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn destination() -> Destination {
        Destination {
            id: "goa".to_string(),
            name: "Goa".to_string(),
            country: "India".to_string(),
            region: "West India".to_string(),
            description: "Sun, sand and seafood.".to_string(),
            budget_category: BudgetCategory::Low,
            best_season: strings(&["Winter", "Spring"]),
            ideal_duration: strings(&["Short", "Medium"]),
            activities: strings(&["Beaches", "Nightlife", "Water Sports", "Food Tours"]),
            accommodation_types: strings(&["Hostel", "Beach Resort", "Guesthouse"]),
            cultural_tags: strings(&["Colonial Heritage", "Festivals", "Local Cuisine"]),
            travel_types: strings(&["Solo"]),
            highlights: strings(&["Baga Beach", "Basilica of Bom Jesus"]),
            image: String::new(),
        }
    }

    #[test]
    fn test_template_layout() {
        let summary = template_summary(&destination());
        let expected = "🌍 **Goa, India**\n\
\n\
Sun, sand and seafood.\n\
\n\
📋 **Trip Overview:**\n\
• Best time to visit: Winter or Spring\n\
• Recommended duration: Short\n\
• Estimated budget: ₹15,000 - ₹25,000 per person\n\
• Top activities: Beaches, Nightlife, Water Sports\n\
• Stay options: Hostel or Beach Resort\n\
• Cultural highlights: Colonial Heritage, Festivals\n\
\n\
🎒 **Packing Tip:**\n\
Pack sunscreen, swimwear, and light cotton clothes.\n\
\n\
✨ **Must-See Highlights:**\n\
• Baga Beach\n\
• Basilica of Bom Jesus\n\
\n\
💡 **Travel Tip:** Book accommodations in advance during peak season and always carry local currency for small vendors.";
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_overview_follows_description() {
        let summary = template_summary(&destination());
        assert!(summary.contains("Sun, sand and seafood.\n\n📋 **Trip Overview:**\n"));
        assert!(!summary.contains("Why It Fits You"));
    }

    #[test]
    fn test_packing_tip_priority() {
        let mut d = destination();
        assert_eq!(packing_tip(&d), BEACH_PACKING);

        d.activities = strings(&["Mountains", "Beaches"]);
        assert_eq!(packing_tip(&d), BEACH_PACKING);

        d.activities = strings(&["Mountains"]);
        assert_eq!(packing_tip(&d), MOUNTAIN_PACKING);

        d.activities = strings(&["Museums"]);
        assert_eq!(packing_tip(&d), GENERIC_PACKING);
    }

    #[test]
    fn test_template_is_byte_identical_across_calls() {
        assert_eq!(
            template_summary(&destination()),
            template_summary(&destination())
        );
    }
}
