use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{SessionLogic, SessionRequest};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::NaiveDateTime;

/// Start Session trigger.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Start { name } = cmd {
        let req = SessionRequest::new(name.as_str(), None);

        let mut pool = DbPool::new(&cfg.database_path())?;
        let outcome = SessionLogic::start(&mut pool, &req, now)?;

        success(format!("Session Started: {}", outcome.message()));
    }
    Ok(())
}
