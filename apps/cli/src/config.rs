use std::str::FromStr;

use avyukt_core::constants::DEFAULT_PACKAGE_PRICE_PER_PERSON;
use rust_decimal::Decimal;

pub struct Config {
    /// `text` or `json`
    pub log_format: String,
    /// Per-person price used when a wallet has no explicit total.
    pub package_price: Decimal,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let log_format = std::env::var("AVYUKT_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        let package_price = std::env::var("AVYUKT_PACKAGE_PRICE")
            .ok()
            .and_then(|raw| Decimal::from_str(raw.trim()).ok())
            .filter(|price| *price >= Decimal::ZERO)
            .unwrap_or_else(|| Decimal::from(DEFAULT_PACKAGE_PRICE_PER_PERSON));
        Self {
            log_format,
            package_price,
        }
    }
}
