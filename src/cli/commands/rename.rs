use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry::BoxRegistry;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { box_id, name } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        BoxRegistry::rename(&pool, *box_id, name)?;
    }

    Ok(())
}
