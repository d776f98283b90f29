//! Travel planner backed by a structured completion provider.
//!
//! Generates destination recommendations and day-by-day itineraries. Every
//! public non-`try_` method falls back to an empty result when the provider
//! fails, so views can render without handling errors.

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::completion::{CompletionRequest, StructuredCompletionTrait};
use crate::error::RequestError;
use crate::types::{DayPlan, DetailedItinerary, RecommendedDestination, TravelerProfile};

/// Default model requested from the provider.
pub const DEFAULT_PLANNER_MODEL: &str = "gemini-3-flash-preview";

/// Configuration for the travel planner.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub model: String,
    /// Upper bound on recommendations kept from a response.
    pub max_recommendations: usize,
    pub itinerary_min_days: u32,
    pub itinerary_max_days: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_PLANNER_MODEL.to_string(),
            max_recommendations: 3,
            itinerary_min_days: 4,
            itinerary_max_days: 5,
        }
    }
}

/// Lenient itinerary shape: either field may be missing or empty.
#[derive(Debug, Default, Deserialize)]
struct RawItinerary {
    #[serde(default)]
    destination: Option<String>,
    #[serde(default)]
    days: Option<Vec<DayPlan>>,
}

/// Planner over any completion provider `C`, including `dyn StructuredCompletionTrait`.
pub struct TravelPlanner<C: StructuredCompletionTrait + ?Sized> {
    client: Arc<C>,
    config: PlannerConfig,
}

impl<C: StructuredCompletionTrait + ?Sized> TravelPlanner<C> {
    pub fn new(client: Arc<C>, config: PlannerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Personalized destinations, or an empty list if generation fails.
    pub async fn recommendations(&self, profile: &TravelerProfile) -> Vec<RecommendedDestination> {
        match self.try_recommendations(profile).await {
            Ok(destinations) => destinations,
            Err(e) => {
                warn!("Recommendation generation failed, showing none: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn try_recommendations(
        &self,
        profile: &TravelerProfile,
    ) -> Result<Vec<RecommendedDestination>, RequestError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt: self.recommendations_prompt(profile),
            schema: recommendations_schema(),
        };

        let value = self.client.complete_json(request).await?;
        let mut destinations: Vec<RecommendedDestination> =
            serde_json::from_value(value).map_err(|e| RequestError::schema(e.to_string()))?;

        debug!("Received {} recommendations", destinations.len());
        destinations.truncate(self.config.max_recommendations);
        Ok(destinations)
    }

    /// Day-by-day plan for `destination`, or an itinerary with no days if
    /// generation fails.
    pub async fn itinerary(&self, destination: &str, profile: &TravelerProfile) -> DetailedItinerary {
        match self.try_itinerary(destination, profile).await {
            Ok(itinerary) => itinerary,
            Err(e) => {
                warn!("Itinerary generation for {} failed: {}", destination, e);
                DetailedItinerary::empty(destination)
            }
        }
    }

    pub async fn try_itinerary(
        &self,
        destination: &str,
        profile: &TravelerProfile,
    ) -> Result<DetailedItinerary, RequestError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt: self.itinerary_prompt(destination, profile),
            schema: itinerary_schema(),
        };

        let value = self.client.complete_json(request).await?;
        let raw: RawItinerary = match value {
            Value::Null => RawItinerary::default(),
            other => {
                serde_json::from_value(other).map_err(|e| RequestError::schema(e.to_string()))?
            }
        };

        Ok(DetailedItinerary {
            destination: raw
                .destination
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| destination.to_string()),
            days: raw.days.unwrap_or_default(),
        })
    }

    fn recommendations_prompt(&self, profile: &TravelerProfile) -> String {
        let dates = if profile.start_date.is_empty() || profile.end_date.is_empty() {
            "Flexible".to_string()
        } else {
            format!("{} to {}", profile.start_date, profile.end_date)
        };

        format!(
            "Suggest {count} personalized travel destinations.\n\
Traveller: {name}\n\
Group: {adults} adults, {children} children\n\
Interests: {interests}\n\
Origin: {origin}\n\
Budget: {budget}\n\
Dates: {dates}\n\
Label each as \"Best Match\", \"Budget Friendly\" or \"Premium\".",
            count = self.config.max_recommendations,
            name = profile.full_name,
            adults = profile.travelers.adults,
            children = profile.travelers.children,
            interests = profile.preferences_joined(", "),
            origin = non_empty_or(&profile.starting_city, "Global Search"),
            budget = non_empty_or(&profile.budget, "Flexible"),
            dates = dates,
        )
    }

    fn itinerary_prompt(&self, destination: &str, profile: &TravelerProfile) -> String {
        format!(
            "Create a {min}-{max} day itinerary for {destination} for {adults} adults and \
{children} children interested in {interests}.",
            min = self.config.itinerary_min_days,
            max = self.config.itinerary_max_days,
            destination = destination,
            adults = profile.travelers.adults,
            children = profile.travelers.children,
            interests = profile.preferences_joined(" and "),
        )
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn recommendations_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "name": { "type": "string" },
                "country": { "type": "string" },
                "description": { "type": "string" },
                "category": {
                    "type": "string",
                    "enum": ["Best Match", "Budget Friendly", "Premium"]
                },
                "bestTimeToVisit": { "type": "string" },
                "duration": { "type": "string" },
                "imageSearchQuery": { "type": "string" },
                "highlights": { "type": "array", "items": { "type": "string" } }
            },
            "required": [
                "id", "name", "country", "description", "category",
                "bestTimeToVisit", "duration", "imageSearchQuery", "highlights"
            ]
        }
    })
}

fn itinerary_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "destination": { "type": "string" },
            "days": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "number" },
                        "activities": { "type": "array", "items": { "type": "string" } }
                    }
                }
            }
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
