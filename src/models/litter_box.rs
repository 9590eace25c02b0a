use serde::Serialize;

use super::event::BoxEvent;
use super::schedule::ReminderSchedule;

/// The fixed seed set: stable ids and default display names.
/// Every id in this table has exactly one persisted record at all times;
/// missing records are auto-created on first load.
pub const DEFAULT_BOXES: [(u32, &str); 6] = [
    (1, "My Bedroom Litter Box"),
    (2, "Living Room Litter Box"),
    (3, "Under Garbage Can Litter Box"),
    (4, "Undertable Litter Box"),
    (5, "Laundry Room Litter Box"),
    (6, "Parents' Bedroom Litter Box"),
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LitterBox {
    pub id: u32,
    pub name: String,
}

impl LitterBox {
    pub fn default_name(id: u32) -> Option<&'static str> {
        DEFAULT_BOXES
            .iter()
            .find(|(bid, _)| *bid == id)
            .map(|(_, name)| *name)
    }

    pub fn is_known(id: u32) -> bool {
        Self::default_name(id).is_some()
    }
}

/// One box paired with everything the dashboard needs to render it:
/// the chronologically sorted event list and the derived schedule.
#[derive(Debug, Clone)]
pub struct BoxView {
    pub litter_box: LitterBox,
    pub events: Vec<BoxEvent>,
    pub schedule: ReminderSchedule,
}
