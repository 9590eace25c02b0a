use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::link;
use crate::core::logger::EventLogger;
use crate::db::journal::jlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::litter_box::LitterBox;
use crate::ui::messages::info;
use chrono::Utc;

/// Handle the `link` command: log an event from externally supplied
/// parameters. Invalid or incomplete parameters skip the operation
/// entirely; the command still exits successfully and nothing is written.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Link { query } = cmd {
        let Some((box_id, activity)) = link::parse(query) else {
            info("Deep link ignored: missing or invalid parameters.");
            return Ok(());
        };

        if !LitterBox::is_known(box_id) {
            info(format!("Deep link ignored: unknown box id {}.", box_id));
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        EventLogger::log(&pool, box_id, activity, Utc::now())?;

        jlog(
            &pool.conn,
            "link",
            &format!("box-{}", box_id),
            &format!("Deep link logged '{}'", activity.as_wire_str()),
        )?;
    }

    Ok(())
}
