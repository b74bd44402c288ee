use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the store (dimension tables, usage ledger, audit log).
/// Delegates all schema creation / upgrades to the migration engine,
/// so `init` on an existing database is a no-op apart from pending
/// migrations.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
