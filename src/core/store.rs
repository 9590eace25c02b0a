//! Event store adapter: the ordered event list of one box, serialized as a
//! JSON array under a per-box key. Owns the wire format; everything else
//! goes through `load`/`save`.

use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::BoxEvent;
use crate::ui::messages::warning;

/// Storage key for a box's event list.
pub fn events_key(box_id: u32) -> String {
    format!("box-events-{}", box_id)
}

pub struct EventStore;

impl EventStore {
    /// Load the event list for a box.
    ///
    /// Fails soft: a missing key or malformed stored value yields an empty
    /// list. Bad data is reported and treated as absent, never surfaced as
    /// an error to the caller.
    pub fn load(pool: &DbPool, box_id: u32) -> Vec<BoxEvent> {
        let raw = match kv::get(&pool.conn, &events_key(box_id)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warning(format!(
                    "Could not read events for box {} ({}); treating as empty.",
                    box_id, e
                ));
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(events) => events,
            Err(e) => {
                warning(format!(
                    "Malformed event list for box {} ({}); treating as empty.",
                    box_id, e
                ));
                Vec::new()
            }
        }
    }

    /// Serialize and write the full event list, overwriting the prior value.
    pub fn save(pool: &DbPool, box_id: u32, events: &[BoxEvent]) -> AppResult<()> {
        let raw =
            serde_json::to_string(events).map_err(|e| AppError::Store(e.to_string()))?;
        kv::set(&pool.conn, &events_key(box_id), &raw)
    }
}
