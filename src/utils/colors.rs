//! ANSI color helper utilities for terminal output.

use chrono::{DateTime, Duration, Utc};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Due-instant color:
/// already past → red
/// due within 6 hours → yellow
/// further out → green
/// unscheduled → grey
pub fn color_for_due(now: DateTime<Utc>, due: Option<DateTime<Utc>>) -> &'static str {
    match due {
        None => GREY,
        Some(t) if t <= now => RED,
        Some(t) if t - now <= Duration::hours(6) => YELLOW,
        Some(_) => GREEN,
    }
}
