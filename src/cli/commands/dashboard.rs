use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::compute_employee_dashboard;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::render::render_dashboard;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        employee_id,
        window,
        json,
    } = cmd
    {
        let window_days = window.unwrap_or(cfg.default_window_days);

        let mut pool = DbPool::new(&cfg.database)?;
        let dashboard = compute_employee_dashboard(&mut pool, *employee_id, window_days)?;

        if *json {
            let out = serde_json::to_string_pretty(&dashboard)
                .map_err(|e| AppError::from(io::Error::other(format!("JSON error: {e}"))))?;
            println!("{}", out);
        } else {
            render_dashboard(&dashboard);
        }
    }

    Ok(())
}
