use crate::core::pay;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{close_session, find_open_session, insert_payroll_entry, insert_session};
use crate::errors::{AppError, AppResult};
use crate::export::sink;
use crate::models::payroll_entry::PayrollEntry;
use crate::models::session_event::SessionEvent;
use crate::utils::formatting::{display_name, normalize_name, rate_text};
use crate::utils::time::format_ts;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

/// Highest accepted hourly rate. Keeps weekly sums far inside `Decimal`.
pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Input of a start/end action, built by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct SessionRequest {
    pub employee_name: String,
    pub rate_input: Option<String>,
}

impl SessionRequest {
    pub fn new(employee_name: impl Into<String>, rate_input: Option<String>) -> Self {
        Self {
            employee_name: employee_name.into(),
            rate_input,
        }
    }

    /// Normalized name, or [`AppError::MissingName`] if blank.
    pub fn name(&self) -> AppResult<String> {
        let name = normalize_name(&self.employee_name);
        if name.is_empty() {
            return Err(AppError::MissingName);
        }
        Ok(name)
    }

    /// Parsed hourly rate. Zero is accepted (unpaid work); negatives and
    /// rates above [`MAX_RATE`] are not.
    pub fn rate(&self) -> AppResult<Decimal> {
        let raw = self
            .rate_input
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(AppError::MissingRate)?;

        let rate = Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| AppError::InvalidRate(raw.to_string()))?;

        if rate < Decimal::ZERO {
            return Err(AppError::NegativeRate(raw.to_string()));
        }
        if rate > MAX_RATE {
            return Err(AppError::RateTooHigh(raw.to_string(), MAX_RATE.to_string()));
        }
        Ok(rate)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartOutcome {
    pub session_id: i64,
    pub employee_name: String,
    pub start_time: NaiveDateTime,
}

impl StartOutcome {
    pub fn message(&self) -> String {
        format!(
            "{} clocked in at {}",
            display_name(&self.employee_name),
            format_ts(&self.start_time)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndOutcome {
    pub session_id: i64,
    pub entry: PayrollEntry,
}

impl EndOutcome {
    pub fn message(&self) -> String {
        let e = &self.entry;
        format!(
            "{} → {:.2} hrs @ ${}/hr\nGross: ${:.2} | Tax: ${:.2} | Net: ${:.2}",
            display_name(&e.employee_name),
            e.hours,
            rate_text(e.rate),
            e.gross,
            e.tax,
            e.net
        )
    }
}

/// Start/end orchestration against the store and the export sink.
pub struct SessionLogic;

impl SessionLogic {
    /// Clock `req.employee_name` in at `now`.
    ///
    /// Rejects a second start while a session for the same name is open.
    pub fn start(
        pool: &mut DbPool,
        req: &SessionRequest,
        now: NaiveDateTime,
    ) -> AppResult<StartOutcome> {
        let name = req.name()?;

        if let Some(open) = find_open_session(&pool.conn, &name)? {
            return Err(AppError::SessionAlreadyOpen {
                name: display_name(&name),
                started: format_ts(&open.start_time),
            });
        }

        let session_id = insert_session(&pool.conn, &SessionEvent::open(&name, now))?;

        ttlog_soft(
            &pool.conn,
            "start",
            &name,
            &format!("session {} opened at {}", session_id, format_ts(&now)),
        );

        Ok(StartOutcome {
            session_id,
            employee_name: name,
            start_time: now,
        })
    }

    /// Clock `req.employee_name` out at `now`, paying `req.rate_input`.
    ///
    /// The session update and the payroll insert share one transaction; the
    /// export row is appended after the commit.
    pub fn end(
        pool: &mut DbPool,
        req: &SessionRequest,
        now: NaiveDateTime,
        export_file: &Path,
    ) -> AppResult<EndOutcome> {
        let name = req.name()?;
        let rate = req.rate()?;

        let open = find_open_session(&pool.conn, &name)?
            .ok_or_else(|| AppError::NoActiveSession(display_name(&name)))?;

        let pay = pay::compute(open.start_time, now, rate)?;
        let mut entry = PayrollEntry::new(&name, rate, open.start_time, now, pay, now);

        entry.id = pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            if close_session(&tx, open.id, &now, rate)? == 0 {
                return Err(AppError::NoActiveSession(display_name(&name)));
            }
            let id = insert_payroll_entry(&tx, &entry)?;
            tx.commit()?;
            Ok(id)
        })?;

        sink::append_entry(export_file, &entry)?;

        ttlog_soft(
            &pool.conn,
            "end",
            &name,
            &format!(
                "session {} closed: {} hrs, gross {}",
                open.id, entry.hours, entry.gross
            ),
        );

        Ok(EndOutcome {
            session_id: open.id,
            entry,
        })
    }
}
