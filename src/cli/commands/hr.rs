use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{set_employee_active, update_employee_salary};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Administrative employee updates. The only mutations the employees table
/// supports: salary and the active flag. Both are audit-logged.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hr { id, salary, active } = cmd {
        if salary.is_none() && active.is_none() {
            warning("Nothing to do: pass --salary and/or --active.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;

        if let Some(new_salary) = salary {
            update_employee_salary(&pool.conn, *id, *new_salary)?;
            ttlog(
                &pool.conn,
                "hr",
                &id.to_string(),
                &format!("Salary updated to {:.2}", new_salary),
            )?;
            success(format!("Employee {} salary updated", id));
        }

        if let Some(flag) = active {
            set_employee_active(&pool.conn, *id, *flag)?;
            ttlog(
                &pool.conn,
                "hr",
                &id.to_string(),
                &format!("Active flag set to {}", flag),
            )?;
            success(format!("Employee {} active = {}", id, flag));
        }
    }

    Ok(())
}
