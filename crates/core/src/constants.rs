/// Minimum number of decimal places kept on a per-person share (paise/cents).
pub const MONEY_SCALE: u32 = 2;

/// Default per-person package price used when a trip total is derived from
/// the member count.
pub const DEFAULT_PACKAGE_PRICE_PER_PERSON: i64 = 12_000;
