use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use chrono::NaiveDateTime;

/// `now` picks the default month.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::List { period, open } = cmd {
        let mut pool = DbPool::new(&cfg.database_path())?;

        if *open {
            let sessions = ListLogic::open_sessions(&mut pool)?;
            if sessions.is_empty() {
                info("No open sessions.");
            } else {
                print!("{}", ListLogic::render_open_sessions(&sessions));
            }
            return Ok(());
        }

        let bounds = ListLogic::resolve_period(period, now.date())?;
        let entries = ListLogic::load_entries(&mut pool, bounds)?;

        if entries.is_empty() {
            info("No payroll entries for the selected period.");
            return Ok(());
        }

        print!("{}", ListLogic::render_entries(&entries));
        println!("{}", cfg.separator_char.repeat(40));
        println!("{} entries", entries.len());
    }
    Ok(())
}
