//! Date and time formatting, consistent across the application.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown wherever a date is absent.
pub const DATE_PLACEHOLDER: &str = "—";

fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// ISO date or datetime -> `DD/MM/YYYY`. Unparseable input is returned
/// verbatim rather than dropped.
pub fn format_date(value: &str) -> String {
    match parse_iso(value) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// ISO datetime -> `DD/MM/YYYY HH:MM`.
pub fn format_datetime(value: &str) -> String {
    match parse_iso(value) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

pub fn format_date_opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format_date(v),
        _ => DATE_PLACEHOLDER.to_string(),
    }
}

pub fn format_datetime_opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format_datetime(v),
        _ => DATE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn formats_datetimes() {
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-03-15T14:02:26"), "15/03/2024 14:02");
    }

    #[test]
    fn absent_dates_render_the_placeholder() {
        assert_eq!(format_date_opt(None), DATE_PLACEHOLDER);
        assert_eq!(format_date_opt(Some("")), DATE_PLACEHOLDER);
        assert_eq!(format_datetime_opt(None), DATE_PLACEHOLDER);
        assert_eq!(format_date_opt(Some("2025-06-01")), "01/06/2025");
    }

    #[test]
    fn unparseable_input_is_returned_verbatim() {
        assert_eq!(format_date("n/a"), "n/a");
        assert_eq!(format_datetime("n/a"), "n/a");
    }
}
