use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{SessionLogic, SessionRequest};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use chrono::NaiveDateTime;

/// End Session trigger.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::End { name, rate } = cmd {
        let req = SessionRequest::new(name.as_str(), rate.clone());
        let export_file = cfg.export_path();

        let mut pool = DbPool::new(&cfg.database_path())?;
        let outcome = SessionLogic::end(&mut pool, &req, now, &export_file)?;

        success("Session Logged");
        println!("{}", outcome.message());
        info(format!("Export row appended to {}", export_file.display()));
    }
    Ok(())
}
