//! Event logger: appends a new event, plus any auto-derived follow-up
//! events, to a box's event list.

use chrono::{DateTime, Duration, Utc};

use crate::core::store::EventStore;
use crate::db::journal::jlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityKind;
use crate::models::event::BoxEvent;
use crate::models::litter_box::LitterBox;
use crate::ui::messages::success;

pub struct EventLogger;

impl EventLogger {
    /// Log one activity on a box at instant `at`.
    ///
    /// The instant is captured once per call: derived events offset from it
    /// rather than re-sampling the clock, so everything one call appends
    /// shares the same timestamp base.
    ///
    /// Logging `cleaned` additionally appends two `scooped (auto)` events
    /// at +24h and +48h: a deep clean resets the scoop cadence for the
    /// following two days.
    ///
    /// All events are appended in a single load → append → save cycle; if
    /// the save fails, nothing is committed.
    pub fn log(
        pool: &DbPool,
        box_id: u32,
        activity: ActivityKind,
        at: DateTime<Utc>,
    ) -> AppResult<Vec<BoxEvent>> {
        if !LitterBox::is_known(box_id) {
            return Err(AppError::UnknownBox(box_id));
        }
        if activity.is_auto() {
            return Err(AppError::InvalidActivity(
                activity.as_wire_str().to_string(),
            ));
        }

        let mut to_append = vec![BoxEvent::new(activity, at)];
        if activity == ActivityKind::Cleaned {
            for day in 1..=2 {
                to_append.push(BoxEvent::new(
                    ActivityKind::ScoopedAuto,
                    at + Duration::hours(24 * day),
                ));
            }
        }

        let mut events = EventStore::load(pool, box_id);
        events.extend(to_append.iter().cloned());
        EventStore::save(pool, box_id, &events)?;

        jlog(
            &pool.conn,
            "log_event",
            &format!("box-{}", box_id),
            &format!(
                "Logged '{}' ({} event(s) appended)",
                activity.as_wire_str(),
                to_append.len()
            ),
        )?;

        success(format!(
            "Logged '{}' for box {}.",
            activity.as_wire_str(),
            box_id
        ));

        Ok(to_append)
    }
}
