//! Deep-link entry point: log an event from externally supplied parameters
//! (a scanned tag, a shared link) without going through the normal CLI
//! arguments.

use crate::models::activity::ActivityKind;

/// Parse a deep-link query into (box id, activity).
///
/// Accepts a bare query string (`box=3&activity=scooped`) or a full URL
/// containing one. Returns `None` for a missing/non-numeric box id or a
/// missing/unknown activity; the caller skips logging entirely in that
/// case, with no default substitution.
pub fn parse(query: &str) -> Option<(u32, ActivityKind)> {
    let query = match query.split_once('?') {
        Some((_, q)) => q,
        None => query,
    };

    let mut box_id: Option<u32> = None;
    let mut activity: Option<ActivityKind> = None;

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };

        match key {
            "box" => box_id = value.parse().ok(),
            "activity" => activity = ActivityKind::from_input(value),
            _ => {}
        }
    }

    Some((box_id?, activity?))
}
