use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_tool;
use crate::errors::{AppError, AppResult};
use crate::models::tool::Tool;
use crate::ui::messages::success;
use crate::utils::date;

/// Register a new AI tool.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Adopt {
        name,
        category,
        vendor,
        cost,
        introduced,
        description,
    } = cmd
    {
        let introduced_on =
            date::parse_date(introduced).ok_or_else(|| AppError::InvalidDate(introduced.clone()))?;

        let tool = Tool {
            id: 0,
            name: name.clone(),
            category: category.clone(),
            vendor: vendor.clone(),
            monthly_cost: *cost,
            introduced_on,
            description: description.clone().unwrap_or_default(),
            active: true,
        };

        let pool = DbPool::new(&cfg.database)?;
        let id = insert_tool(&pool.conn, &tool)?;

        ttlog(
            &pool.conn,
            "adopt",
            name,
            &format!("Adopted {} tool at ${:.2}/month (id {})", category, cost, id),
        )?;

        success(format!("Tool '{}' registered with id {}", name, id));
    }

    Ok(())
}
