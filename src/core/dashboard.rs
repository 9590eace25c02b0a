//! Dashboard composition and rendering: every box paired with its sorted
//! event list and derived schedule, printed to the terminal.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::core::calculator;
use crate::core::registry::BoxRegistry;
use crate::core::store::EventStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::litter_box::BoxView;
use crate::utils::colors::{GREY, RESET, color_for_due};
use crate::utils::time::fmt_instant;

pub struct Dashboard;

impl Dashboard {
    /// Compose the renderer input: registry order, events sorted
    /// chronologically (insertion order is not trusted), schedule derived
    /// from the sorted list.
    pub fn snapshot(pool: &DbPool, cfg: &Config) -> AppResult<Vec<BoxView>> {
        let boxes = BoxRegistry::load_all(pool)?;

        let mut views = Vec::with_capacity(boxes.len());
        for litter_box in boxes {
            let mut events = EventStore::load(pool, litter_box.id);
            events.sort_by_key(|ev| ev.timestamp);

            let schedule = calculator::schedule_for(&events, cfg);
            views.push(BoxView {
                litter_box,
                events,
                schedule,
            });
        }

        Ok(views)
    }

    pub fn render(views: &[BoxView]) {
        let now = Utc::now();
        for view in views {
            Self::render_box(view, now);
        }
    }

    fn render_box(view: &BoxView, now: DateTime<Utc>) {
        println!(
            "🐈 {} {}(box {}){}",
            view.litter_box.name, GREY, view.litter_box.id, RESET
        );

        let scoop_color = color_for_due(now, view.schedule.next_scoop_due);
        let clean_color = color_for_due(now, view.schedule.next_clean_due);

        println!(
            "   Next scoop due: {}{}{}",
            scoop_color,
            fmt_due(view.schedule.next_scoop_due),
            RESET
        );
        println!(
            "   Next clean due: {}{}{}",
            clean_color,
            fmt_due(view.schedule.next_clean_due),
            RESET
        );

        if view.events.is_empty() {
            println!("   {}No events logged yet.{}", GREY, RESET);
        } else {
            for ev in &view.events {
                println!(
                    "   - {} at {}",
                    ev.activity.as_wire_str(),
                    fmt_instant(ev.timestamp)
                );
            }
        }

        println!();
    }
}

fn fmt_due(due: Option<DateTime<Utc>>) -> String {
    match due {
        Some(t) => fmt_instant(t),
        None => "unscheduled".to_string(),
    }
}
