use chrono::{Local, NaiveDate};

/// Format used for contribution capture dates (`10/19/2026`).
pub const CONTRIBUTION_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Today's date in the local timezone of the host.
///
/// Contribution dates describe when the traveller entered the payment, so the
/// wall-clock date of the device is the right one here.
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Renders a capture date for the activity feed.
pub fn format_contribution_date(date: NaiveDate) -> String {
    date.format(CONTRIBUTION_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_contribution_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_contribution_date(date), "3/7/2026");
    }

    #[test]
    fn test_format_contribution_date_two_digit_parts() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_contribution_date(date), "10/19/2026");
    }
}
