//! Travel planning DTOs exchanged with the completion provider.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Traveller profile
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelPreference {
    #[serde(rename = "Hill Station")]
    HillStation,
    Beach,
    Adventure,
    Religious,
    Wildlife,
    Honeymoon,
    Family,
}

impl TravelPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelPreference::HillStation => "Hill Station",
            TravelPreference::Beach => "Beach",
            TravelPreference::Adventure => "Adventure",
            TravelPreference::Religious => "Religious",
            TravelPreference::Wildlife => "Wildlife",
            TravelPreference::Honeymoon => "Honeymoon",
            TravelPreference::Family => "Family",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerCount {
    pub adults: u32,
    pub children: u32,
}

impl Default for TravelerCount {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
        }
    }
}

/// What the onboarding flow knows about the traveller.
///
/// Empty strings mean "not provided".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelerProfile {
    pub full_name: String,
    pub travelers: TravelerCount,
    pub preferences: Vec<TravelPreference>,
    pub starting_city: String,
    pub budget: String,
    pub start_date: String,
    pub end_date: String,
}

impl TravelerProfile {
    pub fn preferences_joined(&self, separator: &str) -> String {
        self.preferences
            .iter()
            .map(TravelPreference::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

// ============================================================================
// Recommendations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestinationCategory {
    #[serde(rename = "Best Match")]
    BestMatch,
    #[serde(rename = "Budget Friendly")]
    BudgetFriendly,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedDestination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub category: DestinationCategory,
    pub best_time_to_visit: String,
    pub duration: String,
    pub image_search_query: String,
    pub highlights: Vec<String>,
}

// ============================================================================
// Itinerary
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(deserialize_with = "deserialize_day_number")]
    pub day: u32,
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedItinerary {
    pub destination: String,
    pub days: Vec<DayPlan>,
}

impl DetailedItinerary {
    /// Itinerary with no days, shown when generation fails.
    pub fn empty(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            days: Vec::new(),
        }
    }
}

/// Day numbers arrive as JSON numbers and may be encoded as floats (`2.0`).
fn deserialize_day_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        })
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid day number: {}", value)))
}
