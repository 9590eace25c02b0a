use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `kv` table exists.
///
/// This table is the generic key-value capability the rest of the crate
/// persists through: one row per key, last write wins.
fn ensure_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `journal` table exists with the modern schema.
fn ensure_journal_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS journal (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Run all pending migrations. Safe to call repeatedly: every step is
/// guarded by an existence probe, so an up-to-date database is a no-op.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_kv_table(conn)?;
    ensure_journal_table(conn)?;

    // Early versions named the audit table `log`; carry its rows over.
    migrate_legacy_log_table(conn)?;

    Ok(())
}

/// Migrate a legacy `log` table into `journal`, then drop it.
fn migrate_legacy_log_table(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "log")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        BEGIN;
        INSERT INTO journal (date, operation, target, message)
        SELECT date, operation, target, message FROM log;
        DROP TABLE log;
        COMMIT;
        "#,
    )?;

    Ok(())
}
