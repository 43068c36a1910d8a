//! Utilities for date and time formatting
//!
//! Timestamps are shown in UTC as YYYY-MM-DD HH:MM:SS

use chrono::{DateTime, Utc};

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Same as `format_timestamp`, with "-" for a missing value
pub fn format_optional_timestamp(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}
