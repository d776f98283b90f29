//! Avyukt AI - structured completion boundary and travel planner.
//!
//! The generative-AI provider is an external collaborator with one contract:
//! a prompt and a JSON schema go in, validated JSON comes out, or the call
//! fails with a [`RequestError`]. Views never see that error; the planner
//! degrades to an empty result instead.
//!
//! # Architecture
//!
//! - `completion`: Provider trait, response text decoding, fake provider
//! - `planner`: Recommendations and itineraries with fallbacks
//! - `types`: DTOs shared with the frontend
//! - `error`: Request error type
//!
//! # Example
//!
//! ```ignore
//! use avyukt_ai::{PlannerConfig, TravelPlanner};
//!
//! let planner = TravelPlanner::new(Arc::new(provider), PlannerConfig::default());
//! let destinations = planner.recommendations(&profile).await;
//! ```

pub mod completion;
pub mod error;
pub mod planner;
pub mod types;

pub use completion::{
    parse_completion_text, CompletionRequest, FakeCompletion, StructuredCompletionTrait,
};
pub use error::RequestError;
pub use planner::{PlannerConfig, TravelPlanner, DEFAULT_PLANNER_MODEL};
pub use types::{
    DayPlan, DestinationCategory, DetailedItinerary, RecommendedDestination, TravelPreference,
    TravelerCount, TravelerProfile,
};
