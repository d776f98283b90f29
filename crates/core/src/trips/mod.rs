//! Trips module - cost context shared by everyone on a trip.

mod trip_model;

pub use trip_model::TripCostContext;
