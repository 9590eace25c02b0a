//! Box registry: the fixed seed set of boxes and their display names.

use crate::db::journal::jlog;
use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::litter_box::{DEFAULT_BOXES, LitterBox};
use crate::ui::messages::{info, success};

/// Storage key for a box's display name.
pub fn name_key(box_id: u32) -> String {
    format!("box-name-{}", box_id)
}

pub struct BoxRegistry;

impl BoxRegistry {
    /// Load the full box set in seed order.
    ///
    /// A missing or emptied name record falls back to the default name and
    /// is written back, so the very first invocation seeds the registry and
    /// later ones are pure reads of identical data.
    pub fn load_all(pool: &DbPool) -> AppResult<Vec<LitterBox>> {
        let mut out = Vec::with_capacity(DEFAULT_BOXES.len());

        for (id, default_name) in DEFAULT_BOXES {
            let stored = kv::get(&pool.conn, &name_key(id))?;

            let name = match stored {
                Some(s) if !s.trim().is_empty() => s,
                _ => {
                    kv::set(&pool.conn, &name_key(id), default_name)?;
                    default_name.to_string()
                }
            };

            out.push(LitterBox { id, name });
        }

        Ok(out)
    }

    /// Rename a box. An empty or whitespace-only name is a no-op: the
    /// previous name (default or custom) is kept and nothing is written.
    pub fn rename(pool: &DbPool, box_id: u32, new_name: &str) -> AppResult<()> {
        if !LitterBox::is_known(box_id) {
            return Err(AppError::UnknownBox(box_id));
        }

        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            info(format!("Empty name ignored; box {} keeps its current name.", box_id));
            return Ok(());
        }

        kv::set(&pool.conn, &name_key(box_id), trimmed)?;

        jlog(
            &pool.conn,
            "rename",
            &format!("box-{}", box_id),
            &format!("Renamed box {} to '{}'", box_id, trimmed),
        )?;

        success(format!("Box {} renamed to '{}'.", box_id, trimmed));
        Ok(())
    }
}
