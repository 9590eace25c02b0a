//! Demo reminder: a single static notification a short delay after launch.
//! There is no real scheduler; the config flag plays the role of the
//! permission grant, and one timer fires once.

use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct NotifyLogic;

impl NotifyLogic {
    pub fn demo(cfg: &Config, delay_override: Option<u64>) -> AppResult<()> {
        if !cfg.notifications {
            info("Notifications are disabled in the configuration; nothing to do.");
            return Ok(());
        }

        let delay = delay_override.unwrap_or(cfg.notify_delay_secs);

        info(format!("Reminder will fire in {} second(s)…", delay));
        thread::sleep(Duration::from_secs(delay));

        println!("🔔 Reminder: Check your litter boxes!");
        Ok(())
    }
}
