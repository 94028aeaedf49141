//! Weekly payroll: aggregation over the Sunday-to-Saturday window, the
//! on-screen listing and the markdown report.

use crate::core::week::{WeekWindow, report_file_name, week_window};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::load_payroll_between;
use crate::errors::AppResult;
use crate::models::payroll_entry::PayrollEntry;
use crate::models::summary::{PayClass, WeeklySummary, WeeklySummaryRow, WeeklyTotals};
use crate::utils::formatting::{display_name, fixed2, money, rate_text};
use crate::utils::table::{Column, Table};
use crate::utils::time::day_start_ts;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a payroll run.
#[derive(Debug, Clone, PartialEq)]
pub enum PayrollOutcome {
    /// Nothing was recorded in the window; no report written.
    Empty { window: WeekWindow },
    /// Summary built; `report` is `None` on a dry run.
    Summary {
        summary: WeeklySummary,
        report: Option<PathBuf>,
    },
}

/// Group entries created inside `window` by `(employee_name, rate)` and
/// compute grand totals.
///
/// Rows are ordered by name, then rate.
pub fn aggregate(window: WeekWindow, entries: &[PayrollEntry]) -> WeeklySummary {
    let mut groups: BTreeMap<(String, Decimal), WeeklySummaryRow> = BTreeMap::new();

    for e in entries.iter().filter(|e| window.contains(e.created_at.date())) {
        let row = groups
            .entry((e.employee_name.clone(), e.rate.normalize()))
            .or_insert_with(|| WeeklySummaryRow {
                employee_name: e.employee_name.clone(),
                rate: e.rate,
                total_hours: Decimal::ZERO,
                total_gross: Decimal::ZERO,
                total_tax: Decimal::ZERO,
                total_net: Decimal::ZERO,
            });

        row.total_hours += e.hours;
        row.total_gross += e.gross;
        row.total_tax += e.tax;
        row.total_net += e.net;
    }

    let rows: Vec<WeeklySummaryRow> = groups.into_values().collect();

    let mut totals = WeeklyTotals::default();
    for r in &rows {
        match r.class() {
            PayClass::Paid => {
                totals.paid_hours += r.total_hours;
                totals.gross += r.total_gross;
                totals.tax += r.total_tax;
                totals.net += r.total_net;
            }
            PayClass::Unpaid => totals.unpaid_hours += r.total_hours,
        }
    }

    WeeklySummary {
        window,
        rows,
        totals,
    }
}

/// Plain-text table shown on screen.
pub fn render_screen(summary: &WeeklySummary) -> String {
    let mut table = Table::new(vec![
        Column::new("Name", 14),
        Column::new("Status", 6),
        Column::new("Rate", 9),
        Column::new("Hours", 8),
        Column::new("Gross", 11),
        Column::new("Tax", 10),
        Column::new("Net", 11),
    ]);

    for r in &summary.rows {
        table.add_row(vec![
            display_name(&r.employee_name),
            r.class().label().to_string(),
            format!("${}", rate_text(r.rate)),
            fixed2(r.total_hours),
            money(r.total_gross),
            money(r.total_tax),
            money(r.total_net),
        ]);
    }

    let t = &summary.totals;
    let mut out = table.render();
    out.push('\n');
    out.push_str(&format!("🧾 Paid Hours: {}\n", fixed2(t.paid_hours)));
    out.push_str(&format!("🧾 Unpaid Hours: {}\n", fixed2(t.unpaid_hours)));
    out.push_str(&format!("💰 Total Gross: {}\n", money(t.gross)));
    out.push_str(&format!("🧾 Total Tax: {}\n", money(t.tax)));
    out.push_str(&format!("💸 Total Net: {}\n", money(t.net)));
    out
}

/// Markdown body of the weekly report file.
pub fn render_markdown(summary: &WeeklySummary) -> String {
    let mut lines = vec![
        "# Weekly Payroll Summary".to_string(),
        String::new(),
        format!(
            "_Week of {} to {}_",
            summary.window.start,
            summary.window.last_day()
        ),
        String::new(),
    ];

    for r in &summary.rows {
        lines.push(format!(
            "- **{}** ({}): {} hrs, Gross {}, Tax {}, Net {}",
            display_name(&r.employee_name),
            r.class().label(),
            fixed2(r.total_hours),
            money(r.total_gross),
            money(r.total_tax),
            money(r.total_net)
        ));
    }

    let t = &summary.totals;
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(format!("**Total Paid Hours**: {}", fixed2(t.paid_hours)));
    lines.push(format!("**Total Unpaid Hours**: {}", fixed2(t.unpaid_hours)));
    lines.push(format!("**Total Gross**: {}", money(t.gross)));
    lines.push(format!("**Total Tax**: {}", money(t.tax)));
    lines.push(format!("**Total Net**: {}", money(t.net)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub struct PayrollLogic;

impl PayrollLogic {
    /// Build the summary for the week containing `now`.
    pub fn summarize(pool: &mut DbPool, now: NaiveDateTime) -> AppResult<Option<WeeklySummary>> {
        let window = week_window(now.date());
        let from = day_start_ts(window.start);
        let to = day_start_ts(window.end);

        let entries = load_payroll_between(&pool.conn, Some(&from), Some(&to))?;
        if entries.is_empty() {
            return Ok(None);
        }
        Ok(Some(aggregate(window, &entries)))
    }

    /// Run payroll for the week containing `now`, writing the markdown report
    /// into `report_dir` unless `dry_run`. Reruns in the same ISO week
    /// overwrite the same file.
    pub fn run(
        pool: &mut DbPool,
        now: NaiveDateTime,
        report_dir: &Path,
        dry_run: bool,
    ) -> AppResult<PayrollOutcome> {
        let Some(summary) = Self::summarize(pool, now)? else {
            return Ok(PayrollOutcome::Empty {
                window: week_window(now.date()),
            });
        };

        let report = if dry_run {
            None
        } else {
            fs::create_dir_all(report_dir)?;
            let path = report_dir.join(report_file_name(now.date()));
            fs::write(&path, render_markdown(&summary))?;

            ttlog_soft(
                &pool.conn,
                "payroll",
                &report_file_name(now.date()),
                &format!("{} groups written to {}", summary.rows.len(), path.display()),
            );
            Some(path)
        };

        Ok(PayrollOutcome::Summary { summary, report })
    }
}
