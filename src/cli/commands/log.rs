use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_usage_event;
use crate::errors::{AppError, AppResult};
use crate::models::usage_event::UsageEvent;
use crate::ui::messages::success;
use crate::utils::date;

/// Append one usage event to the ledger.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        employee_id,
        tool_id,
        minutes_used,
        minutes_saved,
        quality,
        date: date_arg,
        note,
    } = cmd
    {
        let usage_date = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        // Constructor enforces quality 1-5 and non-negative minutes.
        let event = UsageEvent::new(
            *employee_id,
            *tool_id,
            usage_date,
            *minutes_used,
            *minutes_saved,
            *quality,
            note.clone(),
        )?;

        let pool = DbPool::new(&cfg.database)?;
        let id = insert_usage_event(&pool.conn, &event)?;

        ttlog(
            &pool.conn,
            "log",
            &format!("event {}", id),
            &format!(
                "Employee {} used tool {} for {} min, saved {} min, quality {}",
                employee_id, tool_id, minutes_used, minutes_saved, quality
            ),
        )?;

        success(format!("Usage event {} recorded", id));
    }

    Ok(())
}
