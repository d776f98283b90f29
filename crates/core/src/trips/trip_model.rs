//! Trip domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total trip cost and the people sharing it.
///
/// Both are fixed for the lifetime of a wallet session. Member order is the
/// order members were added and is only used for stable display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripCostContext {
    pub total_cost: Decimal,
    pub members: Vec<String>,
}

impl TripCostContext {
    pub fn new(total_cost: Decimal, members: Vec<String>) -> Self {
        Self {
            total_cost,
            members,
        }
    }

    /// Builds a context for a package priced per traveller.
    ///
    /// The total saturates at `Decimal::MAX` for absurd prices.
    pub fn per_person_package(price_per_person: Decimal, members: Vec<String>) -> Self {
        let total_cost = price_per_person.saturating_mul(Decimal::from(members.len()));
        Self {
            total_cost,
            members,
        }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}
