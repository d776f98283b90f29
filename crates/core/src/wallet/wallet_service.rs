//! Group wallet session: validated entry of contributions over a ledger.

use std::str::FromStr;

use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::ledger::{add_contribution, Ledger};
use super::settlement_calculator::compute_summary;
use super::wallet_model::{Contribution, NewContribution, SettlementSummary, WalletSnapshot};
use crate::errors::{Result, ValidationError};
use crate::trips::TripCostContext;
use crate::utils::time_utils::{format_contribution_date, local_date_today};

/// One trip's shared wallet.
///
/// The cost context is fixed for the session. Contributions are only ever
/// prepended, and the summary is recomputed from scratch on every read.
#[derive(Debug, Clone, Default)]
pub struct GroupWallet {
    context: TripCostContext,
    ledger: Ledger,
}

impl GroupWallet {
    pub fn new(context: TripCostContext) -> Self {
        Self {
            context,
            ledger: Ledger::new(),
        }
    }

    pub fn with_ledger(context: TripCostContext, ledger: Ledger) -> Self {
        Self { context, ledger }
    }

    pub fn from_snapshot(snapshot: WalletSnapshot) -> Self {
        Self {
            context: TripCostContext::new(snapshot.total_cost, snapshot.members),
            ledger: Ledger::from_entries(snapshot.contributions),
        }
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        WalletSnapshot {
            total_cost: self.context.total_cost,
            members: self.context.members.clone(),
            contributions: self.ledger.entries().to_vec(),
        }
    }

    pub fn context(&self) -> &TripCostContext {
        &self.context
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Activity feed, newest first.
    pub fn activity(&self) -> &[Contribution] {
        self.ledger.entries()
    }

    pub fn summary(&self) -> SettlementSummary {
        compute_summary(
            self.context.total_cost,
            &self.context.members,
            self.ledger.entries(),
        )
    }

    /// Validates `input` and records it with today's date.
    pub fn add_contribution(&mut self, input: NewContribution) -> Result<Contribution> {
        self.add_contribution_at(input, local_date_today())
    }

    /// Validates `input` and records it with the given capture date.
    ///
    /// On error the ledger is left exactly as it was.
    pub fn add_contribution_at(
        &mut self,
        input: NewContribution,
        date: NaiveDate,
    ) -> Result<Contribution> {
        let entry = self.build_contribution(input, date)?;
        self.ledger = add_contribution(&self.ledger, entry.clone());
        info!(
            "Recorded {} contribution of {} from {}",
            entry.mode.as_str(),
            entry.amount,
            entry.member_name
        );
        Ok(entry)
    }

    fn build_contribution(&self, input: NewContribution, date: NaiveDate) -> Result<Contribution> {
        let member_name = input.member_name.trim();
        if member_name.is_empty() {
            return Err(ValidationError::MissingField("memberName".to_string()).into());
        }

        let amount = parse_amount(&input.amount)?;

        if !self.context.has_member(member_name) {
            return Err(ValidationError::UnknownMember(member_name.to_string()).into());
        }

        let remarks = input
            .remarks
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        let id = Uuid::now_v7().to_string();
        debug!("Assigned contribution id {}", id);

        Ok(Contribution {
            id,
            member_name: member_name.to_string(),
            amount,
            mode: input.mode,
            date: format_contribution_date(date),
            remarks,
        })
    }
}

/// Parses a user-typed amount. Must be a positive decimal.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField("amount".to_string()).into());
    }

    let amount = Decimal::from_str(raw).map_err(ValidationError::DecimalParse)?;
    if amount <= Decimal::ZERO {
        return Err(
            ValidationError::InvalidInput(format!("Amount must be positive, got {}", amount)).into(),
        );
    }
    Ok(amount)
}
