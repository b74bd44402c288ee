use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::compute_adoption_trends;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::render::render_adoption_trends;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trends { months, json } = cmd {
        let lookback = months.unwrap_or(cfg.default_lookback_months);

        let mut pool = DbPool::new(&cfg.database)?;
        let report = compute_adoption_trends(&mut pool, lookback)?;

        if *json {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::from(io::Error::other(format!("JSON error: {e}"))))?;
            println!("{}", out);
        } else {
            render_adoption_trends(&report);
        }
    }

    Ok(())
}
