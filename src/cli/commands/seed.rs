use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::seed::seed_database;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { days, force } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        seed_database(&mut pool, *days, *force)?;
        success(format!("Demo dataset seeded ({} days of usage history)", days));
    }

    Ok(())
}
