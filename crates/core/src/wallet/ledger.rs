//! Append-only contribution ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wallet_model::Contribution;

/// Ordered contributions for one trip, newest first.
///
/// A ledger is never edited in place: adding an entry produces a new ledger
/// and leaves the previous value intact for anyone still reading it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Contribution>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps entries that are already ordered newest first.
    pub fn from_entries(entries: Vec<Contribution>) -> Self {
        Self { entries }
    }

    /// Returns a new ledger with `entry` at the head.
    pub fn with_contribution(&self, entry: Contribution) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contribution> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Contribution] {
        &self.entries
    }

    /// Sum of every amount in the ledger, saturating at `Decimal::MAX`.
    pub fn total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.amount))
    }

    /// Contributions made by `member_name`, newest first.
    pub fn entries_for<'a>(
        &'a self,
        member_name: &'a str,
    ) -> impl Iterator<Item = &'a Contribution> + 'a {
        self.entries
            .iter()
            .filter(move |c| c.member_name == member_name)
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Contribution;
    type IntoIter = std::slice::Iter<'a, Contribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Prepends `entry` to `ledger` without touching the original.
pub fn add_contribution(ledger: &Ledger, entry: Contribution) -> Ledger {
    ledger.with_contribution(entry)
}
