use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assembler::build_executive_summary;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::render::render_executive_summary;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { json } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let summary = build_executive_summary(&mut pool, cfg)?;

        if *json {
            let out = serde_json::to_string_pretty(&summary)
                .map_err(|e| AppError::from(io::Error::other(format!("JSON error: {e}"))))?;
            println!("{}", out);
        } else {
            render_executive_summary(&summary);
        }
    }

    Ok(())
}
