use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::activity::ActivityKind;

/// One logged action on a box. Events are immutable once created: there is
/// no edit and no delete, the list only grows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoxEvent {
    pub activity: ActivityKind,
    pub timestamp: DateTime<Utc>, // persisted as RFC 3339 UTC
}

impl BoxEvent {
    pub fn new(activity: ActivityKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            activity,
            timestamp,
        }
    }
}
