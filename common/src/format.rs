//! Timestamp parsing and display helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// Placeholder shown for an absent timestamp.
pub const MISSING: &str = "-";

/// Parses an ISO 8601 timestamp. A bare `YYYY-MM-DD` date is taken as
/// midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_time_of_day(value: &DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}

pub fn format_optional(value: Option<&DateTime<Utc>>, fmt: fn(&DateTime<Utc>) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_date_only_forms() {
        let full = parse_timestamp("2024-01-15T09:05:00Z").unwrap();
        assert_eq!(format_timestamp(&full), "2024-01-15 09:05");

        let date_only = parse_timestamp("2024-01-15").unwrap();
        assert_eq!(format_timestamp(&date_only), "2024-01-15 00:00");

        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn offsets_are_normalised_to_utc() {
        let t = parse_timestamp("2024-01-15T12:00:00+03:00").unwrap();
        assert_eq!(format_time_of_day(&t), "09:00");
    }

    #[test]
    fn missing_values_render_a_dash() {
        assert_eq!(format_optional(None, format_time_of_day), "-");
        let t = parse_timestamp("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(format_optional(Some(&t), format_time_of_day), "10:30");
    }
}
