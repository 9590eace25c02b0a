use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logger::EventLogger;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityKind;
use crate::utils::time::parse_instant;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        box_id,
        activity,
        at,
    } = cmd
    {
        //
        // 1. Parse activity (mandatory)
        //
        let kind = ActivityKind::from_input(activity)
            .ok_or_else(|| AppError::InvalidActivity(activity.to_string()))?;

        //
        // 2. Resolve the instant: --at override or now
        //
        let instant = match at {
            Some(raw) => parse_instant(raw)?,
            None => Utc::now(),
        };

        //
        // 3. Open DB and log
        //
        let pool = DbPool::new(&cfg.database)?;
        EventLogger::log(&pool, *box_id, kind, instant)?;
    }

    Ok(())
}
