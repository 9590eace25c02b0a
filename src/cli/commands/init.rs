use crate::config::Config;
use crate::db::journal;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();

    // Resolve the DB path the same way init_all did: relative names land
    // in the config directory.
    let db_path = match &cli.db {
        Some(custom) => {
            let p = std::path::Path::new(custom);
            if p.is_absolute() {
                custom.clone()
            } else {
                Config::config_dir().join(p).to_string_lossy().to_string()
            }
        }
        None => Config::load().database,
    };

    println!("⚙️  Initializing rLitterbox…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;

    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // journal row is best effort: init already succeeded
    if let Err(e) = journal::jlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write journal entry: {}", e);
    }

    println!("🎉 rLitterbox initialization completed!");
    Ok(())
}
