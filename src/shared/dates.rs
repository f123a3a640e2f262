// src/shared/dates.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const UNKNOWN_DATE: &str = "Unknown date";

fn parse(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// "May 10, 2025"; the raw value when it does not parse, `Unknown date` when absent.
pub fn format_long_date(raw: Option<&str>) -> String {
    match raw.filter(|r| !r.trim().is_empty()) {
        None => UNKNOWN_DATE.to_string(),
        Some(raw) => match parse(raw.trim()) {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => raw.to_string(),
        },
    }
}
