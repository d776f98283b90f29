//! Avyukt group wallet tool.
//!
//! Loads a wallet (from a JSON file, stdin, or a member list), optionally
//! records new contributions, and prints the settlement summary as JSON.
//!
//! Usage:
//!   avyukt-wallet --file trip.json
//!   avyukt-wallet --member You --member "Rohan S." --add "You:5000"
//!   cat trip.json | avyukt-wallet --file - --add "Rohan S.:2000:physical:Cab" --snapshot

mod config;
mod input;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use avyukt_core::{GroupWallet, TripCostContext};
use clap::Parser;
use config::Config;
use input::{parse_add_entry, SnapshotInput};
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Group wallet settlement for a shared trip
#[derive(Parser, Debug)]
#[command(name = "avyukt-wallet")]
#[command(about = "Track trip contributions and settle them against an even split")]
struct Cli {
    /// Wallet JSON file (`-` reads stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Trip member, in display order (repeatable). Used when no file is given.
    #[arg(short, long = "member")]
    members: Vec<String>,

    /// Total trip cost. Defaults to the package price times the member count.
    #[arg(short, long)]
    total: Option<Decimal>,

    /// Record a contribution: member:amount[:online|physical[:remarks]] (repeatable)
    #[arg(short, long = "add")]
    add: Vec<String>,

    /// Print the updated wallet instead of the summary
    #[arg(long)]
    snapshot: bool,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn load_wallet(cli: &Cli, config: &Config) -> Result<GroupWallet> {
    match &cli.file {
        Some(path) => {
            if !cli.members.is_empty() {
                bail!("--member cannot be combined with --file");
            }
            let raw = if path.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read wallet from stdin")?;
                buf
            } else {
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read wallet file {}", path.display()))?
            };
            let mut input: SnapshotInput =
                serde_json::from_str(&raw).context("Wallet file is not valid wallet JSON")?;
            if cli.total.is_some() {
                input.total_cost = cli.total;
            }
            Ok(input.into_wallet(config.package_price))
        }
        None => {
            if cli.members.is_empty() {
                bail!("Provide a wallet with --file or at least one --member");
            }
            let members = cli.members.clone();
            let context = match cli.total {
                Some(total) => TripCostContext::new(total, members),
                None => TripCostContext::per_person_package(config.package_price, members),
            };
            Ok(GroupWallet::new(context))
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    let mut wallet = load_wallet(&cli, config)?;
    tracing::info!(
        "Loaded wallet: {} members, {} contributions, total {}",
        wallet.context().member_count(),
        wallet.ledger().len(),
        wallet.context().total_cost
    );

    for raw in &cli.add {
        let entry = parse_add_entry(raw).with_context(|| format!("Invalid --add '{}'", raw))?;
        wallet
            .add_contribution(entry)
            .with_context(|| format!("Rejected contribution '{}'", raw))?;
    }

    let summary = wallet.summary();
    for balance in &summary.member_balances {
        tracing::info!(
            "{}: {} (paid {}, diff {})",
            balance.name,
            balance.status.as_str(),
            balance.paid,
            balance.diff
        );
    }

    let output = if cli.snapshot {
        serde_json::to_string_pretty(&wallet.snapshot())?
    } else {
        serde_json::to_string_pretty(&summary)?
    };
    println!("{}", output);
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);
    let cli = Cli::parse();
    run(cli, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn config() -> Config {
        Config {
            log_format: "text".to_string(),
            package_price: dec!(12000),
        }
    }

    fn cli(file: Option<PathBuf>, members: &[&str], total: Option<Decimal>) -> Cli {
        Cli {
            file,
            members: members.iter().map(|m| m.to_string()).collect(),
            total,
            add: Vec::new(),
            snapshot: false,
        }
    }

    fn write_wallet(dir: &std::path::Path, json: &str) -> PathBuf {
        let path = dir.join("trip.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_file_and_member_are_rejected_together() {
        let dir = tempdir().unwrap();
        let path = write_wallet(dir.path(), r#"{"members": ["You"]}"#);

        let err = load_wallet(&cli(Some(path), &["Rohan S."], None), &config()).unwrap_err();
        assert!(err.to_string().contains("--member cannot be combined with --file"));
    }

    #[test]
    fn test_total_flag_overrides_file_total() {
        let dir = tempdir().unwrap();
        let path = write_wallet(
            dir.path(),
            r#"{"totalCost": 9000, "members": ["You", "Rohan S."]}"#,
        );

        let wallet = load_wallet(&cli(Some(path.clone()), &[], None), &config()).unwrap();
        assert_eq!(wallet.context().total_cost, dec!(9000));

        let wallet = load_wallet(&cli(Some(path), &[], Some(dec!(3000))), &config()).unwrap();
        assert_eq!(wallet.context().total_cost, dec!(3000));
        assert_eq!(wallet.summary().per_person_share, dec!(1500));
    }

    #[test]
    fn test_file_without_total_uses_package_price() {
        let dir = tempdir().unwrap();
        let path = write_wallet(dir.path(), r#"{"members": ["You", "Rohan S.", "Priya"]}"#);

        let wallet = load_wallet(&cli(Some(path), &[], None), &config()).unwrap();
        assert_eq!(wallet.context().total_cost, dec!(36000));
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let err = load_wallet(&cli(None, &[], None), &config()).unwrap_err();
        assert!(err
            .to_string()
            .contains("Provide a wallet with --file or at least one --member"));

        let err = load_wallet(&cli(None, &[], Some(dec!(1000))), &config()).unwrap_err();
        assert!(err.to_string().contains("at least one --member"));
    }

    #[test]
    fn test_members_only_wallet() {
        let wallet = load_wallet(&cli(None, &["You", "Rohan S."], None), &config()).unwrap();
        assert_eq!(wallet.context().members, vec!["You", "Rohan S."]);
        assert_eq!(wallet.context().total_cost, dec!(24000));
        assert!(wallet.ledger().is_empty());

        let wallet =
            load_wallet(&cli(None, &["You"], Some(dec!(5000))), &config()).unwrap();
        assert_eq!(wallet.context().total_cost, dec!(5000));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_wallet(&cli(Some(path), &[], None), &config()).unwrap_err();
        assert!(err.to_string().contains("Failed to read wallet file"));
    }
}
