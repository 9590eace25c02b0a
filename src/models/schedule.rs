use chrono::{DateTime, Utc};
use serde::Serialize;

/// Derived reminder instants for one box. Never persisted: always a pure
/// function of the current event list.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ReminderSchedule {
    pub next_scoop_due: Option<DateTime<Utc>>,
    pub next_clean_due: Option<DateTime<Utc>>,
}
