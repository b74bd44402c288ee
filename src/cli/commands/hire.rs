use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_employee;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, Seniority};
use crate::ui::messages::success;
use crate::utils::date;

/// Register a new employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hire {
        name,
        department,
        role,
        seniority,
        hired,
        salary,
    } = cmd
    {
        let hire_date =
            date::parse_date(hired).ok_or_else(|| AppError::InvalidDate(hired.clone()))?;

        let seniority = Seniority::from_input(seniority)
            .ok_or_else(|| AppError::InvalidSeniority(seniority.clone()))?;

        let employee = Employee {
            id: 0,
            name: name.clone(),
            department: department.clone(),
            role: role.clone(),
            seniority,
            hire_date,
            base_salary: *salary,
            active: true,
        };

        let pool = DbPool::new(&cfg.database)?;
        let id = insert_employee(&pool.conn, &employee)?;

        ttlog(
            &pool.conn,
            "hire",
            name,
            &format!("Hired into {} as {} (id {})", department, role, id),
        )?;

        success(format!("Employee '{}' registered with id {}", name, id));
    }

    Ok(())
}
