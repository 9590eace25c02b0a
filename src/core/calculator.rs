//! Reminder calculator: pure derivation from an event list to next-due
//! instants. No state is kept anywhere; every call re-derives from the full
//! list, so the result can never go stale relative to newly logged events.

use chrono::{DateTime, Duration, Utc};

use crate::config::Config;
use crate::models::activity::ActivityKind;
use crate::models::event::BoxEvent;
use crate::models::schedule::ReminderSchedule;

/// Next due instant for one activity: the latest event whose kind equals
/// `anchor` exactly, plus `cadence`. `None` when nothing anchors.
///
/// The anchor match is exact on purpose: auto-generated scoop entries are a
/// different kind and never move the scoop reminder, which tracks scoops
/// the user actually performed.
pub fn next_due(
    events: &[BoxEvent],
    anchor: ActivityKind,
    cadence: Duration,
) -> Option<DateTime<Utc>> {
    events
        .iter()
        .filter(|ev| ev.activity == anchor)
        .map(|ev| ev.timestamp)
        .max()
        .map(|last| last + cadence)
}

/// Both reminder instants for a box, using the configured cadences.
pub fn schedule_for(events: &[BoxEvent], cfg: &Config) -> ReminderSchedule {
    ReminderSchedule {
        next_scoop_due: next_due(
            events,
            ActivityKind::Scooped,
            Duration::hours(cfg.scoop_cadence_hours),
        ),
        next_clean_due: next_due(
            events,
            ActivityKind::Cleaned,
            Duration::days(cfg.clean_cadence_days),
        ),
    }
}
