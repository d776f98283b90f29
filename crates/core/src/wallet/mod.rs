//! Group wallet module - contribution ledger and settlement.
//!
//! Members of a trip record what they paid towards it; the settlement
//! calculator compares each member's total with an even share of the trip
//! cost.

mod ledger;
mod settlement_calculator;
mod wallet_model;
mod wallet_service;

pub use ledger::{add_contribution, Ledger};
pub use settlement_calculator::{compute_summary, per_person_share};
pub use wallet_model::{
    BalanceStatus, Contribution, MemberBalance, NewContribution, PaymentMode, SettlementSummary,
    WalletSnapshot,
};
pub use wallet_service::{parse_amount, GroupWallet};
