use crate::db::pool::DbPool;
use crate::db::queries::{count_rows, load_payroll_between};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    let sessions = count_rows(&pool.conn, "session_log")?;
    let payroll = count_rows(&pool.conn, "payroll")?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM session_log WHERE end_time IS NULL",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Sessions:{} {}{}{}", CYAN, RESET, GREEN, sessions, RESET);
    println!("{}• Open sessions:{} {}", CYAN, RESET, open);
    println!(
        "{}• Payroll entries:{} {}{}{}",
        CYAN, RESET, GREEN, payroll, RESET
    );

    //
    // 3) PAYROLL DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM payroll ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM payroll ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Payroll range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}

/// Payroll rows whose stored amounts disagree with each other, plus closed
/// sessions never marked as logged. Empty when the store is consistent.
pub fn check_consistency(conn: &Connection) -> AppResult<Vec<String>> {
    let mut problems = Vec::new();

    for e in load_payroll_between(conn, None, None)? {
        if e.tax + e.net != e.gross {
            problems.push(format!(
                "payroll #{} ({}): tax {} + net {} != gross {}",
                e.id, e.employee_name, e.tax, e.net, e.gross
            ));
        }
        if e.end_time < e.start_time {
            problems.push(format!(
                "payroll #{} ({}): ends before it starts",
                e.id, e.employee_name
            ));
        }
    }

    let mut stmt = conn.prepare(
        "SELECT id, name FROM session_log
         WHERE end_time IS NOT NULL AND logged = 0
         ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;
    for r in rows {
        let (id, name) = r?;
        problems.push(format!("session #{} ({}): closed but not logged", id, name));
    }

    Ok(problems)
}
