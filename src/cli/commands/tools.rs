use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{list_tools, set_tool_active};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tools { all, retire } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(id) = retire {
            set_tool_active(&pool.conn, *id, false)?;
            ttlog(
                &pool.conn,
                "retire",
                &id.to_string(),
                "Tool marked inactive",
            )?;
            success(format!("Tool {} marked inactive", id));
            return Ok(());
        }

        let tools = list_tools(&pool.conn, !all)?;

        if tools.is_empty() {
            println!("No tools found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column { header: "ID".into(), width: 4 },
            Column { header: "NAME".into(), width: 20 },
            Column { header: "CATEGORY".into(), width: 20 },
            Column { header: "VENDOR".into(), width: 12 },
            Column { header: "COST/MO".into(), width: 9 },
            Column { header: "SINCE".into(), width: 11 },
            Column { header: "ACTIVE".into(), width: 6 },
        ]);

        for t in &tools {
            table.add_row(vec![
                t.id.to_string(),
                t.name.clone(),
                t.category.clone(),
                t.vendor.clone(),
                format!("${:.2}", t.monthly_cost),
                t.introduced_on_str(),
                if t.active { "yes".into() } else { "no".into() },
            ]);
        }

        println!("{}", table.render());
    }

    Ok(())
}
