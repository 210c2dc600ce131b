//! Display formatting for resume data.

use chrono::{DateTime, Utc};

use crate::models::parse_timestamp;

pub const INVALID_DATE: &str = "Invalid date";
pub const NO_RATING: &str = "N/A";

/// `May 1, 2024`
pub fn format_upload_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Format a raw server timestamp, or [`INVALID_DATE`] if it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(timestamp) => format_upload_date(&timestamp),
        None => INVALID_DATE.to_string(),
    }
}

/// Size in kilobytes with one decimal, e.g. `2048.0 KB`.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Rating out of ten, e.g. `7.5/10`.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(value) if value.is_finite() => format!("{:.1}/10", value),
        _ => NO_RATING.to_string(),
    }
}
