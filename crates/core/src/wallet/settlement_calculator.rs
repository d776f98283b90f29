//! Settlement calculator.
//!
//! Turns a trip total, its member list and the contribution ledger into a
//! [`SettlementSummary`]. The calculation is pure: it reads its inputs, never
//! mutates them, and never fails.

use std::collections::{HashMap, HashSet};

use log::debug;
use rust_decimal::Decimal;

use super::wallet_model::{BalanceStatus, Contribution, MemberBalance, SettlementSummary};
use crate::constants::MONEY_SCALE;

/// Even share of `total_cost` across `member_count` people.
///
/// The divisor is floored at one, so an empty member list yields the whole
/// total. The quotient keeps at least [`MONEY_SCALE`] decimal places, or the
/// scale of `total_cost` when that is larger, so a one-way split returns the
/// total unchanged.
pub fn per_person_share(total_cost: Decimal, member_count: usize) -> Decimal {
    let divisor = Decimal::from(member_count.max(1));
    let scale = MONEY_SCALE.max(total_cost.scale());
    (total_cost / divisor).round_dp(scale)
}

/// Computes the settlement summary for one trip.
///
/// Contributions whose `member_name` is not in `members` still count towards
/// `total_paid` (and `unassigned_paid`) but get no balance row.
///
/// Sums and differences saturate at `Decimal::MAX` / `Decimal::MIN` instead
/// of overflowing.
pub fn compute_summary(
    total_cost: Decimal,
    members: &[String],
    contributions: &[Contribution],
) -> SettlementSummary {
    let share = per_person_share(total_cost, members.len());
    let listed: HashSet<&str> = members.iter().map(String::as_str).collect();

    let mut total_paid = Decimal::ZERO;
    let mut unassigned_paid = Decimal::ZERO;
    let mut paid_by_member: HashMap<&str, Decimal> = HashMap::with_capacity(members.len());

    for contribution in contributions {
        total_paid = total_paid.saturating_add(contribution.amount);
        let name = contribution.member_name.as_str();
        if listed.contains(name) {
            let paid = paid_by_member.entry(name).or_insert(Decimal::ZERO);
            *paid = paid.saturating_add(contribution.amount);
        } else {
            unassigned_paid = unassigned_paid.saturating_add(contribution.amount);
        }
    }

    if !unassigned_paid.is_zero() {
        debug!(
            "{} paid by names outside the member list is counted in the total only",
            unassigned_paid
        );
    }

    let member_balances = members
        .iter()
        .map(|name| {
            let paid = paid_by_member
                .get(name.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            let diff = paid.saturating_sub(share);
            MemberBalance {
                name: name.clone(),
                paid,
                diff,
                status: BalanceStatus::from_diff(diff),
            }
        })
        .collect();

    SettlementSummary {
        total_paid,
        remaining: total_cost.saturating_sub(total_paid).max(Decimal::ZERO),
        per_person_share: share,
        member_balances,
        unassigned_paid,
    }
}
