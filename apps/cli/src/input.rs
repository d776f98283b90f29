//! Parsing of wallet files and `--add` entries.

use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use avyukt_core::{Contribution, GroupWallet, Ledger, NewContribution, PaymentMode, TripCostContext};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Wallet file contents. `totalCost` may be omitted, in which case the trip
/// is priced per member.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInput {
    #[serde(default)]
    pub total_cost: Option<Decimal>,
    pub members: Vec<String>,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

impl SnapshotInput {
    pub fn into_wallet(self, package_price: Decimal) -> GroupWallet {
        let context = match self.total_cost {
            Some(total) => TripCostContext::new(total, self.members),
            None => TripCostContext::per_person_package(package_price, self.members),
        };
        GroupWallet::with_ledger(context, Ledger::from_entries(self.contributions))
    }
}

/// Parses `member:amount[:mode[:remarks]]`.
///
/// Remarks may contain further colons. Amount validation is left to the
/// wallet so the error messages match the form.
pub fn parse_add_entry(raw: &str) -> Result<NewContribution> {
    let mut parts = raw.splitn(4, ':');
    let member_name = parts.next().unwrap_or_default().to_string();
    let amount = parts
        .next()
        .ok_or_else(|| anyhow!("expected member:amount, got '{}'", raw))?
        .to_string();
    let mode = match parts.next().map(str::trim) {
        None | Some("") => PaymentMode::Online,
        Some(raw) => PaymentMode::from_str(raw).map_err(|e| anyhow!(e))?,
    };
    let remarks = parts.next().map(str::to_string);

    if member_name.trim().is_empty() && amount.trim().is_empty() {
        bail!("empty contribution entry");
    }

    Ok(NewContribution {
        member_name,
        amount,
        mode,
        remarks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_add_entry_minimal() {
        let entry = parse_add_entry("Rohan S.:2500").unwrap();
        assert_eq!(entry.member_name, "Rohan S.");
        assert_eq!(entry.amount, "2500");
        assert_eq!(entry.mode, PaymentMode::Online);
        assert_eq!(entry.remarks, None);
    }

    #[test]
    fn test_parse_add_entry_full() {
        let entry = parse_add_entry("You:800:physical:Dinner at 9:30").unwrap();
        assert_eq!(entry.mode, PaymentMode::Physical);
        assert_eq!(entry.remarks.as_deref(), Some("Dinner at 9:30"));
    }

    #[test]
    fn test_parse_add_entry_rejects_bad_input() {
        assert!(parse_add_entry("You").is_err());
        assert!(parse_add_entry(":").is_err());
        assert!(parse_add_entry("You:10:cheque").is_err());
    }

    #[test]
    fn test_snapshot_without_total_is_priced_per_member() {
        let input: SnapshotInput =
            serde_json::from_str(r#"{"members": ["You", "Rohan"]}"#).unwrap();
        let wallet = input.into_wallet(dec!(12000));
        assert_eq!(wallet.context().total_cost, dec!(24000));
        assert!(wallet.ledger().is_empty());
    }

    #[test]
    fn test_snapshot_with_total_keeps_it() {
        let input: SnapshotInput =
            serde_json::from_str(r#"{"totalCost": 5000, "members": ["You"]}"#).unwrap();
        let wallet = input.into_wallet(dec!(12000));
        assert_eq!(wallet.context().total_cost, dec!(5000));
    }
}
