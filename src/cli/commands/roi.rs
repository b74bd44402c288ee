use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::compute_tool_roi;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::render::render_tool_roi;
use crate::utils::date::month_name;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roi {
        department,
        month,
        year,
        json,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        match compute_tool_roi(&mut pool, cfg, department, *month, *year)? {
            Some(report) => {
                if *json {
                    let out = serde_json::to_string_pretty(&report).map_err(|e| {
                        AppError::from(io::Error::other(format!("JSON error: {e}")))
                    })?;
                    println!("{}", out);
                } else {
                    render_tool_roi(&report);
                }
            }
            // A quiet month is not a failure; exit 0.
            None => info(format!(
                "No usage data for {} in {} {}",
                department,
                month_name(*month),
                year
            )),
        }
    }

    Ok(())
}
