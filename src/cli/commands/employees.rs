use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::list_employees;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employees { department, all } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let employees = list_employees(&pool.conn, department.as_deref(), !all)?;

        if employees.is_empty() {
            println!("No employees found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column { header: "ID".into(), width: 4 },
            Column { header: "NAME".into(), width: 20 },
            Column { header: "DEPARTMENT".into(), width: 14 },
            Column { header: "ROLE".into(), width: 22 },
            Column { header: "SENIORITY".into(), width: 10 },
            Column { header: "HIRED".into(), width: 11 },
            Column { header: "SALARY".into(), width: 10 },
            Column { header: "ACTIVE".into(), width: 6 },
        ]);

        for e in &employees {
            table.add_row(vec![
                e.id.to_string(),
                e.name.clone(),
                e.department.clone(),
                e.role.clone(),
                e.seniority.to_db_str().to_string(),
                e.hire_date_str(),
                format!("{:.0}", e.base_salary),
                if e.active { "yes".into() } else { "no".into() },
            ]);
        }

        println!("{}", table.render());
    }

    Ok(())
}
