use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::journal::JournalLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Journal { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        JournalLogic::print(&mut pool)?;
    }

    Ok(())
}
