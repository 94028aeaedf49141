// src/export/logic.rs

use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::load_payroll_between;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::PayrollExport;
use crate::ui::messages::warning;
use crate::utils::time::day_start_ts;
use chrono::{Duration, NaiveDate};
use std::path::Path;

/// Bulk export of payroll entries, independent of the append-only sink.
pub struct ExportLogic;

impl ExportLogic {
    /// Export payroll entries created within `range` (inclusive dates).
    ///
    /// - `range`: `None`, `"all"` or an expression accepted by
    ///   [`parse_range`](crate::export::range::parse_range)
    ///
    /// Returns the number of exported entries.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if path.as_os_str().is_empty() {
            return Err(AppError::Export("output file path is empty".into()));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(crate::export::range::parse_range(r)?),
        };

        let (from, to) = match bounds {
            Some((d1, d2)) => (
                Some(day_start_ts(d1)),
                Some(day_start_ts(d2 + Duration::days(1))),
            ),
            None => (None, None),
        };

        let entries: Vec<PayrollExport> =
            load_payroll_between(&pool.conn, from.as_deref(), to.as_deref())?
                .iter()
                .map(PayrollExport::from)
                .collect();

        if entries.is_empty() {
            warning("No payroll entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
        }

        ttlog_soft(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} entries to {}", entries.len(), path.display()),
        );

        Ok(entries.len())
    }
}
