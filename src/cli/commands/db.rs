use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let db_path = cfg.database_path();
    let mut pool = DbPool::new(&db_path)?;

    if *show_info {
        stats::print_db_info(&mut pool, &db_path)?;
    }

    if *check {
        info("Running integrity check…");
        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            success("Integrity check passed.");
        } else {
            warning(format!("Integrity check failed: {}", integrity));
        }

        let problems = stats::check_consistency(&pool.conn)?;
        if problems.is_empty() {
            success("Payroll amounts are consistent.");
        } else {
            for p in &problems {
                warning(p);
            }
        }
    }

    if *vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
