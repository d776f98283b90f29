//! Avyukt Core - group wallet domain models and settlement.
//!
//! This crate holds the only piece of Avyukt with real business logic: the
//! shared trip wallet. Members record contributions, and the settlement
//! calculator reports who is settled, overpaid or still due against an even
//! split of the trip cost. Nothing here performs I/O.

pub mod constants;
pub mod errors;
pub mod trips;
pub mod utils;
pub mod wallet;

pub use trips::TripCostContext;
pub use wallet::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
