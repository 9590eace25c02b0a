use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::BoxEvent;
use crate::models::litter_box::DEFAULT_BOXES;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED KEYS
    //
    let keys = kv::count(&pool.conn)?;
    println!("{}• Stored keys:{} {}{}{}", CYAN, RESET, GREEN, keys, RESET);

    //
    // 3) EVENTS PER BOX
    //
    println!("{}• Events per box:{}", CYAN, RESET);

    let mut total: usize = 0;
    for (id, _) in DEFAULT_BOXES {
        let count = match kv::get(&pool.conn, &format!("box-events-{}", id))? {
            Some(raw) => serde_json::from_str::<Vec<BoxEvent>>(&raw)
                .map(|evs| evs.len())
                .unwrap_or(0),
            None => 0,
        };
        total += count;

        if count == 0 {
            println!("    box {}: {}--{}", id, GREY, RESET);
        } else {
            println!("    box {}: {}", id, count);
        }
    }

    println!("{}• Total events:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);

    println!();
    Ok(())
}
