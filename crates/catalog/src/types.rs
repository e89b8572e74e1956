//! Core domain types for the destination catalog.
//!
//! `Destination` is owned by the [`Catalog`](crate::Catalog) and never mutated
//! after load. `UserPreferences` is built fresh for every request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Unique identifier for a destination (e.g. "goa")
pub type DestinationId = String;

/// Season label that matches every destination
pub const ANYTIME: &str = "Anytime";

// =============================================================================
// Budget
// =============================================================================

/// Spending band for a destination or a traveler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetCategory {
    Low,
    Medium,
    High,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Estimated spend per person for a trip in this band
    pub fn estimated_range(&self) -> &'static str {
        match self {
            Self::Low => "₹15,000 - ₹25,000",
            Self::Medium => "₹35,000 - ₹55,000",
            Self::High => "₹70,000 - ₹1,50,000",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(CatalogError::InvalidValue {
                field: "budget".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Destination
// =============================================================================

/// A single catalog entry.
///
/// Ordered lists treat their first element as primary: `best_season[0]` is the
/// headline season and `ideal_duration[0]` the recommended trip length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub country: String,
    pub region: String,
    pub description: String,
    pub budget_category: BudgetCategory,
    pub best_season: Vec<String>,
    pub ideal_duration: Vec<String>,
    pub activities: Vec<String>,
    pub accommodation_types: Vec<String>,
    pub cultural_tags: Vec<String>,
    pub travel_types: Vec<String>,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub image: String,
}

impl Destination {
    /// "Name, Country" for headings and prompts
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    pub fn has_activity(&self, activity: &str) -> bool {
        self.activities.iter().any(|a| a == activity)
    }

    /// Named tag lists, in declaration order, for integrity checks
    pub(crate) fn tag_lists(&self) -> [(&'static str, &[String]); 7] {
        [
            ("bestSeason", &self.best_season),
            ("idealDuration", &self.ideal_duration),
            ("activities", &self.activities),
            ("accommodationTypes", &self.accommodation_types),
            ("culturalTags", &self.cultural_tags),
            ("travelTypes", &self.travel_types),
            ("highlights", &self.highlights),
        ]
    }
}

// =============================================================================
// Preferences
// =============================================================================

/// What a traveler asked for.
///
/// The four single selections are required; `activities` must be non-empty
/// while `accommodation` and `cultural` may be left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub budget: BudgetCategory,
    pub duration: String,
    pub season: String,
    pub travel_type: String,
    pub activities: Vec<String>,
    #[serde(default)]
    pub accommodation: Vec<String>,
    #[serde(default)]
    pub cultural: Vec<String>,
}

impl UserPreferences {
    pub fn is_anytime(&self) -> bool {
        self.season == ANYTIME
    }

    /// Check the selections the input surface is expected to enforce.
    ///
    /// Scoring never calls this: the engine accepts any preference set.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("duration", &self.duration),
            ("season", &self.season),
            ("travelType", &self.travel_type),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingPreference {
                    field: field.to_string(),
                });
            }
        }
        if self.activities.is_empty() {
            return Err(CatalogError::MissingPreference {
                field: "activities".to_string(),
            });
        }
        Ok(())
    }
}
