use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::payroll::{PayrollLogic, PayrollOutcome, render_screen};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::path::expand_tilde;
use chrono::NaiveDateTime;

/// Run Payroll trigger.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Payroll { dir, dry_run } = cmd {
        let report_dir = match dir {
            Some(d) => expand_tilde(d),
            None => cfg.report_path(),
        };

        let mut pool = DbPool::new(&cfg.database_path())?;

        match PayrollLogic::run(&mut pool, now, &report_dir, *dry_run)? {
            PayrollOutcome::Empty { window } => {
                info(format!(
                    "No payroll data found for the week {} to {}.",
                    window.start,
                    window.last_day()
                ));
            }
            PayrollOutcome::Summary { summary, report } => {
                header(format!(
                    "Weekly Payroll Summary ({} to {})",
                    summary.window.start,
                    summary.window.last_day()
                ));
                print!("{}", render_screen(&summary));

                if let Some(path) = report {
                    success(format!("Report written to {}", path.display()));
                }
            }
        }
    }
    Ok(())
}
