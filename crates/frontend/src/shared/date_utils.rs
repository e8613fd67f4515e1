/// Utilities for date formatting
///
/// Provides consistent date formatting across the application
use chrono::NaiveDate;

/// Format a date as "Mon D, YYYY"
/// Example: 2024-01-15 -> "Jan 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a date as "M/D/YYYY"
/// Example: 2024-01-05 -> "1/5/2024"
pub fn format_date_numeric(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Parse the value of an `<input type="date">`; empty or malformed input is `None`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Render a date back into `<input type="date">` format
pub fn to_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 1, 15)), "Jan 15, 2024");
        assert_eq!(format_date(date(2024, 3, 5)), "Mar 5, 2024");
    }

    #[test]
    fn test_format_date_numeric() {
        assert_eq!(format_date_numeric(date(2024, 1, 5)), "1/5/2024");
        assert_eq!(format_date_numeric(date(2024, 12, 31)), "12/31/2024");
    }

    #[test]
    fn test_input_date_roundtrip() {
        assert_eq!(parse_input_date("1990-05-04"), Some(date(1990, 5, 4)));
        assert_eq!(to_input_date(Some(date(1990, 5, 4))), "1990-05-04");
        assert_eq!(to_input_date(None), "");
    }

    #[test]
    fn test_invalid_input_date() {
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("04.05.1990"), None);
    }
}
