use crate::db::pool::DbPool;
use crate::db::queries::{load_open_sessions, load_payroll_between};
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::payroll_entry::PayrollEntry;
use crate::models::session_event::SessionEvent;
use crate::utils::colors::{RESET, color_for_open};
use crate::utils::formatting::{display_name, fixed2, money, rate_text};
use crate::utils::table::{Column, Table};
use crate::utils::time::{day_start_ts, format_ts};
use chrono::{Datelike, Duration, NaiveDate};

pub struct ListLogic;

impl ListLogic {
    /// Resolve `--period` into inclusive bounds. `None` means the month of
    /// `today`, `"all"` means no bounds.
    pub fn resolve_period(
        period: &Option<String>,
        today: NaiveDate,
    ) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
        match period.as_deref() {
            Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
            Some(p) => parse_range(p).map(Some),
            None => parse_range(&format!("{:04}-{:02}", today.year(), today.month())).map(Some),
        }
    }

    pub fn load_entries(
        pool: &mut DbPool,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<PayrollEntry>> {
        let (from, to) = match bounds {
            Some((d1, d2)) => (
                Some(day_start_ts(d1)),
                Some(day_start_ts(d2 + Duration::days(1))),
            ),
            None => (None, None),
        };
        load_payroll_between(&pool.conn, from.as_deref(), to.as_deref())
    }

    pub fn render_entries(entries: &[PayrollEntry]) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Name", 14),
            Column::new("Start", 19),
            Column::new("End", 19),
            Column::new("Hours", 7),
            Column::new("Rate", 9),
            Column::new("Gross", 11),
            Column::new("Net", 11),
        ]);

        for e in entries {
            table.add_row(vec![
                e.id.to_string(),
                display_name(&e.employee_name),
                format_ts(&e.start_time),
                format_ts(&e.end_time),
                fixed2(e.hours),
                format!("${}", rate_text(e.rate)),
                money(e.gross),
                money(e.net),
            ]);
        }
        table.render()
    }

    pub fn render_open_sessions(sessions: &[SessionEvent]) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Name", 14),
            Column::new("Started", 19),
        ]);

        for s in sessions {
            table.add_row(vec![
                s.id.to_string(),
                display_name(&s.employee_name),
                format!("{}{}{}", color_for_open(s.is_open()), format_ts(&s.start_time), RESET),
            ]);
        }
        table.render()
    }

    pub fn open_sessions(pool: &mut DbPool) -> AppResult<Vec<SessionEvent>> {
        load_open_sessions(&pool.conn)
    }
}
