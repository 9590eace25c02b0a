//! Time utilities: RFC 3339 parsing and display formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Compact display form for the dashboard and event tables.
pub fn fmt_instant(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M UTC").to_string()
}
