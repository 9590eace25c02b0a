use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notify::NotifyLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify { delay } = cmd {
        NotifyLogic::demo(cfg, *delay)?;
    }
    Ok(())
}
