use crate::errors::AppResult;
use rusqlite::Connection;

/// Create every table and index if absent. Safe to run on each open.
///
/// Amounts, rates and hours are stored as decimal strings; timestamps use
/// the fixed `%Y-%m-%dT%H:%M:%S` format so they compare lexicographically.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS session_log (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT,
            rate        TEXT,
            logged      INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_session_log_open
            ON session_log(name, end_time, start_time);

        CREATE TABLE IF NOT EXISTS payroll (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            rate        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            hours       TEXT NOT NULL,
            gross       TEXT NOT NULL,
            tax         TEXT NOT NULL,
            net         TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_payroll_created_at ON payroll(created_at);

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
