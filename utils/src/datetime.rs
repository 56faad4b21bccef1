//! Date formatting helpers
//!
//! Formats are pinned rather than derived from the ambient locale, so
//! rendering is identical across environments.

use chrono::{DateTime, Utc};

/// Format a timestamp as a calendar date, e.g. `2024/03/07`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Format a timestamp with time of day, e.g. `2024/03/07 08:05`.
pub fn format_date_time(date: &DateTime<Utc>) -> String {
    date.format("%Y/%m/%d %H:%M").to_string()
}
