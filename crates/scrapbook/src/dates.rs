//! Calendar-date helpers for `YYYY-MM-DD` strings

use chrono::NaiveDate;

/// Parses an ISO calendar date; anything else is `None`
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// "September 15, 2025"
pub fn format_date(date: &str) -> Option<String> {
    parse_date(date).map(|d| d.format("%B %-d, %Y").to_string())
}

/// "Sep 15, 2025"
pub fn format_date_short(date: &str) -> Option<String> {
    parse_date(date).map(|d| d.format("%b %-d, %Y").to_string())
}

/// Month bucket of a date: sortable key ("2025-09") and label ("September 2025")
pub fn month_key(date: &str) -> Option<(String, String)> {
    parse_date(date).map(|d| (d.format("%Y-%m").to_string(), d.format("%B %Y").to_string()))
}

/// Formatted date, or the raw text when it does not parse
pub fn display_date(date: &str) -> String {
    format_date(date).unwrap_or_else(|| date.to_string())
}

/// Short formatted date, or the raw text when it does not parse
pub fn display_date_short(date: &str) -> String {
    format_date_short(date).unwrap_or_else(|| date.to_string())
}
