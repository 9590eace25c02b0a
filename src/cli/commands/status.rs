use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { box_id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let views = Dashboard::snapshot(&pool, cfg)?;

        match box_id {
            Some(id) => {
                let view = views
                    .iter()
                    .find(|v| v.litter_box.id == *id)
                    .ok_or(AppError::UnknownBox(*id))?;
                Dashboard::render(std::slice::from_ref(view));
            }
            None => Dashboard::render(&views),
        }
    }

    Ok(())
}
