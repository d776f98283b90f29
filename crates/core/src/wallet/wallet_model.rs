//! Group wallet domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a contribution was paid. Descriptive only; settlement ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMode {
    #[default]
    Online,
    Physical,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Online => "Online",
            PaymentMode::Physical => "Physical",
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(PaymentMode::Online),
            "physical" | "cash" => Ok(PaymentMode::Physical),
            other => Err(format!("Unknown payment mode: {}", other)),
        }
    }
}

/// A payment made by one member towards the trip. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub member_name: String,
    pub amount: Decimal,
    pub mode: PaymentMode,
    /// Display-formatted capture date. Never parsed.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Raw form input for a new contribution, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub member_name: String,
    /// Amount exactly as typed by the user.
    pub amount: String,
    #[serde(default)]
    pub mode: PaymentMode,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Where a member stands against their even share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceStatus {
    Settled,
    Overpaid,
    Due,
}

impl BalanceStatus {
    /// Classifies a member by the sign of `paid - share`.
    pub fn from_diff(diff: Decimal) -> Self {
        if diff.is_zero() {
            BalanceStatus::Settled
        } else if diff > Decimal::ZERO {
            BalanceStatus::Overpaid
        } else {
            BalanceStatus::Due
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceStatus::Settled => "Settled",
            BalanceStatus::Overpaid => "Overpaid",
            BalanceStatus::Due => "Due",
        }
    }
}

/// One row of the member status list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberBalance {
    pub name: String,
    /// Sum of this member's contributions
    pub paid: Decimal,
    /// paid - per_person_share (positive means overpaid)
    pub diff: Decimal,
    pub status: BalanceStatus,
}

/// Derived settlement report. Recomputed on every read, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    /// Sum of every contribution in the ledger
    pub total_paid: Decimal,
    /// max(0, total_cost - total_paid)
    pub remaining: Decimal,
    pub per_person_share: Decimal,
    /// One row per listed member, in member order
    pub member_balances: Vec<MemberBalance>,
    /// Paid by names that are not in the member list
    pub unassigned_paid: Decimal,
}

impl SettlementSummary {
    pub fn balance_for(&self, name: &str) -> Option<&MemberBalance> {
        self.member_balances.iter().find(|b| b.name == name)
    }

    pub fn is_fully_paid(&self) -> bool {
        self.remaining.is_zero()
    }
}

/// Serializable state of one wallet session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub total_cost: Decimal,
    pub members: Vec<String>,
    /// Newest first
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}
