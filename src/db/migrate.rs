use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
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

/// Create the `employees` dimension table.
fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            department  TEXT NOT NULL,
            role        TEXT NOT NULL,
            seniority   TEXT NOT NULL CHECK(seniority IN ('Junior','Mid','Senior','Lead')),
            hire_date   TEXT NOT NULL,
            base_salary REAL NOT NULL,
            active      INTEGER NOT NULL DEFAULT 1
        );

        CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department);
        "#,
    )?;
    Ok(())
}

/// Create the `ai_tools` dimension table.
fn create_tools_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS ai_tools (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            category      TEXT NOT NULL,
            vendor        TEXT NOT NULL DEFAULT '',
            monthly_cost  REAL NOT NULL DEFAULT 0,
            introduced_on TEXT NOT NULL,
            description   TEXT NOT NULL DEFAULT '',
            active        INTEGER NOT NULL DEFAULT 1
        );
        "#,
    )?;
    Ok(())
}

/// Create the `usage_events` ledger.
///
/// Append-only: the crate defines no UPDATE or DELETE for this table, so any
/// report over a closed period is reproducible from the rows alone.
fn create_usage_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS usage_events (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   INTEGER NOT NULL REFERENCES employees(id),
            tool_id       INTEGER NOT NULL REFERENCES ai_tools(id),
            date          TEXT NOT NULL,
            minutes_used  INTEGER NOT NULL CHECK(minutes_used >= 0),
            minutes_saved INTEGER NOT NULL CHECK(minutes_saved >= 0),
            quality       INTEGER NOT NULL CHECK(quality BETWEEN 1 AND 5),
            note          TEXT NOT NULL DEFAULT '',
            source        TEXT NOT NULL DEFAULT 'cli',
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_usage_events_date ON usage_events(date);
        CREATE INDEX IF NOT EXISTS idx_usage_events_employee ON usage_events(employee_id, date);
        CREATE INDEX IF NOT EXISTS idx_usage_events_tool ON usage_events(tool_id);
        "#,
    )?;
    Ok(())
}

/// Add the `description` column to ai_tools for databases created before it
/// existed. Recorded in `log` so it runs exactly once.
fn migrate_add_tool_description(conn: &Connection) -> Result<()> {
    let version = "20250614_0003_add_tool_description";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    let mut cols = conn.prepare("PRAGMA table_info('ai_tools')")?;
    let names = cols.query_map([], |row| row.get::<_, String>(1))?;
    for c in names {
        if c? == "description" {
            return Ok(()); // fresh schema already has it
        }
    }

    conn.execute(
        "ALTER TABLE ai_tools ADD COLUMN description TEXT NOT NULL DEFAULT '';",
        [],
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added description to ai_tools')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'description' to ai_tools table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Dimension tables
    let fresh = !table_exists(conn, "employees")?;
    create_employees_table(conn)?;
    create_tools_table(conn)?;

    // 3) Usage ledger
    create_usage_events_table(conn)?;

    if fresh {
        success("Created aipulse schema (employees, ai_tools, usage_events).");
    }

    // 4) Column-level upgrades for older databases
    migrate_add_tool_description(conn)?;

    Ok(())
}
