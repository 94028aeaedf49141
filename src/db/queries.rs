use crate::errors::{AppError, AppResult};
use crate::models::payroll_entry::PayrollEntry;
use crate::models::session_event::SessionEvent;
use crate::utils::time::{format_ts, parse_ts};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Column conversions
// ---------------------------------------------------------------------------

fn conversion_failure(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn get_ts(row: &Row, col: &str) -> Result<NaiveDateTime> {
    let raw: String = row.get(col)?;
    let idx = row.as_ref().column_index(col)?;
    parse_ts(&raw).map_err(|e| conversion_failure(idx, e))
}

fn get_opt_ts(row: &Row, col: &str) -> Result<Option<NaiveDateTime>> {
    let raw: Option<String> = row.get(col)?;
    let idx = row.as_ref().column_index(col)?;
    raw.map(|s| parse_ts(&s).map_err(|e| conversion_failure(idx, e)))
        .transpose()
}

fn get_decimal(row: &Row, col: &str) -> Result<Decimal> {
    let raw: String = row.get(col)?;
    let idx = row.as_ref().column_index(col)?;
    Decimal::from_str(&raw).map_err(|e| conversion_failure(idx, AppError::from(e)))
}

fn get_opt_decimal(row: &Row, col: &str) -> Result<Option<Decimal>> {
    let raw: Option<String> = row.get(col)?;
    let idx = row.as_ref().column_index(col)?;
    raw.map(|s| Decimal::from_str(&s).map_err(|e| conversion_failure(idx, AppError::from(e))))
        .transpose()
}

pub fn map_session_row(row: &Row) -> Result<SessionEvent> {
    Ok(SessionEvent {
        id: row.get("id")?,
        employee_name: row.get("name")?,
        start_time: get_ts(row, "start_time")?,
        end_time: get_opt_ts(row, "end_time")?,
        rate: get_opt_decimal(row, "rate")?,
        logged: row.get::<_, i32>("logged")? == 1,
    })
}

pub fn map_payroll_row(row: &Row) -> Result<PayrollEntry> {
    Ok(PayrollEntry {
        id: row.get("id")?,
        employee_name: row.get("name")?,
        rate: get_decimal(row, "rate")?,
        start_time: get_ts(row, "start_time")?,
        end_time: get_ts(row, "end_time")?,
        hours: get_decimal(row, "hours")?,
        gross: get_decimal(row, "gross")?,
        tax: get_decimal(row, "tax")?,
        net: get_decimal(row, "net")?,
        created_at: get_ts(row, "created_at")?,
    })
}

// ---------------------------------------------------------------------------
// session_log
// ---------------------------------------------------------------------------

/// Insert a new open session and return its id.
pub fn insert_session(conn: &Connection, ev: &SessionEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO session_log (name, start_time, end_time, rate, logged)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ev.employee_name,
            format_ts(&ev.start_time),
            ev.end_time.as_ref().map(format_ts),
            ev.rate.map(|r| r.to_string()),
            if ev.logged { 1 } else { 0 },
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Most recently started session for `name` that has not been closed.
pub fn find_open_session(conn: &Connection, name: &str) -> AppResult<Option<SessionEvent>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM session_log
         WHERE name = ?1 AND end_time IS NULL
         ORDER BY start_time DESC, id DESC
         LIMIT 1",
    )?;

    let ev = stmt.query_row([name], map_session_row).optional()?;
    Ok(ev)
}

/// All open sessions, oldest first.
pub fn load_open_sessions(conn: &Connection) -> AppResult<Vec<SessionEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM session_log
         WHERE end_time IS NULL
         ORDER BY start_time ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Close session `id`. Returns the number of rows touched (0 if it was
/// already closed).
pub fn close_session(
    conn: &Connection,
    id: i64,
    end_time: &NaiveDateTime,
    rate: Decimal,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE session_log SET end_time = ?1, rate = ?2, logged = 1
         WHERE id = ?3 AND end_time IS NULL",
        params![format_ts(end_time), rate.to_string(), id],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// payroll
// ---------------------------------------------------------------------------

pub fn insert_payroll_entry(conn: &Connection, e: &PayrollEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO payroll (name, rate, start_time, end_time, hours, gross, tax, net, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            e.employee_name,
            e.rate.to_string(),
            format_ts(&e.start_time),
            format_ts(&e.end_time),
            e.hours.to_string(),
            e.gross.to_string(),
            e.tax.to_string(),
            e.net.to_string(),
            format_ts(&e.created_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Payroll entries with `from <= created_at < to`; either bound may be open.
/// Bounds are timestamps in the store format.
pub fn load_payroll_between(
    conn: &Connection,
    from: Option<&str>,
    to: Option<&str>,
) -> AppResult<Vec<PayrollEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM payroll
         WHERE (?1 IS NULL OR created_at >= ?1)
           AND (?2 IS NULL OR created_at < ?2)
         ORDER BY created_at ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![from, to], map_payroll_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    let sql = match table {
        "payroll" => "SELECT COUNT(*) FROM payroll",
        "session_log" => "SELECT COUNT(*) FROM session_log",
        "log" => "SELECT COUNT(*) FROM log",
        other => return Err(AppError::Config(format!("unknown table '{}'", other))),
    };
    Ok(conn.query_row(sql, [], |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pay::compute;
    use crate::db::initialize::init_db;

    fn conn() -> Connection {
        let c = Connection::open_in_memory().unwrap();
        init_db(&c).unwrap();
        c
    }

    fn ts(s: &str) -> NaiveDateTime {
        parse_ts(s).unwrap()
    }

    #[test]
    fn test_find_open_session_picks_most_recent() {
        let c = conn();
        insert_session(&c, &SessionEvent::open("alice", ts("2025-10-13T08:00:00"))).unwrap();
        let newest =
            insert_session(&c, &SessionEvent::open("alice", ts("2025-10-13T09:00:00"))).unwrap();
        insert_session(&c, &SessionEvent::open("bob", ts("2025-10-13T10:00:00"))).unwrap();

        let open = find_open_session(&c, "alice").unwrap().unwrap();
        assert_eq!(open.id, newest);
        assert!(open.is_open());
    }

    #[test]
    fn test_close_session_only_once() {
        let c = conn();
        let id = insert_session(&c, &SessionEvent::open("alice", ts("2025-10-13T08:00:00")))
            .unwrap();
        let end = ts("2025-10-13T09:00:00");
        assert_eq!(close_session(&c, id, &end, Decimal::from(20)).unwrap(), 1);
        assert_eq!(close_session(&c, id, &end, Decimal::from(20)).unwrap(), 0);
        assert!(find_open_session(&c, "alice").unwrap().is_none());
    }

    #[test]
    fn test_payroll_range_is_half_open() {
        let c = conn();
        let start = ts("2025-10-12T09:00:00");
        let end = ts("2025-10-12T10:00:00");
        let pay = compute(start, end, Decimal::from(20)).unwrap();

        for created in ["2025-10-11T23:59:59", "2025-10-12T00:00:00", "2025-10-19T00:00:00"] {
            let e = PayrollEntry::new("alice", Decimal::from(20), start, end, pay, ts(created));
            insert_payroll_entry(&c, &e).unwrap();
        }

        let rows =
            load_payroll_between(&c, Some("2025-10-12T00:00:00"), Some("2025-10-19T00:00:00"))
                .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].created_at, ts("2025-10-12T00:00:00"));
        assert_eq!(rows[0].gross, Decimal::from(20));

        assert_eq!(load_payroll_between(&c, None, None).unwrap().len(), 3);
    }
}
