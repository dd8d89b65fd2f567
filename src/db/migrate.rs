use crate::ui::messages::warning;
use rusqlite::{Connection, Result};

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

fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_projects_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id         TEXT PRIMARY KEY,
            title      TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   INTEGER NOT NULL REFERENCES employees(id),
            date          TEXT NOT NULL,
            clock_in      TEXT,
            clock_out     TEXT,
            break_minutes INTEGER NOT NULL DEFAULT 0,
            notes         TEXT,
            created_at    TEXT NOT NULL,
            UNIQUE(employee_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_employee_date
            ON attendance(employee_id, date);
        "#,
    )?;
    Ok(())
}

fn create_activities_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS activities (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER NOT NULL REFERENCES employees(id),
            kind        TEXT NOT NULL CHECK(kind IN ('task','meeting','shooting','event')),
            title       TEXT NOT NULL DEFAULT '',
            project_id  TEXT REFERENCES projects(id),
            date        TEXT NOT NULL,
            deadline    TEXT,
            status      TEXT NOT NULL DEFAULT 'todo'
                        CHECK(status IN ('todo','in_progress','scheduled','done','completed','cancelled')),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_activities_employee_date
            ON activities(employee_id, date);
        CREATE INDEX IF NOT EXISTS idx_activities_project
            ON activities(project_id);
        "#,
    )?;
    Ok(())
}

/// Check if a table has a given column.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Migrate pre-0.3 attendance tables that tracked no break time.
fn migrate_add_break_minutes(conn: &Connection) -> Result<()> {
    if table_has_column(conn, "attendance", "break_minutes")? {
        return Ok(());
    }

    warning("Adding 'break_minutes' column to attendance table...");
    conn.execute_batch(
        "ALTER TABLE attendance ADD COLUMN break_minutes INTEGER NOT NULL DEFAULT 0;",
    )?;
    Ok(())
}

/// Run every pending migration. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_employees_table(conn)?;
    create_projects_table(conn)?;
    create_attendance_table(conn)?;
    create_activities_table(conn)?;
    migrate_add_break_minutes(conn)?;
    Ok(())
}
