use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry::BoxRegistry;
use crate::core::store::EventStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::table::{Column, Table};
use crate::utils::time::fmt_instant;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { box_id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let boxes = BoxRegistry::load_all(&pool)?;
        let litter_box = boxes
            .iter()
            .find(|b| b.id == *box_id)
            .ok_or(AppError::UnknownBox(*box_id))?;

        let mut events = EventStore::load(&pool, *box_id);
        events.sort_by_key(|ev| ev.timestamp);

        println!("Events for '{}' (box {}):\n", litter_box.name, litter_box.id);

        if events.is_empty() {
            println!("No events logged yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("timestamp", 20),
            Column::new("activity", 14),
        ]);

        for ev in &events {
            table.add_row(vec![
                fmt_instant(ev.timestamp),
                ev.activity.as_wire_str().to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
