//! Store contracts for the two dimension tables and the usage ledger.
//!
//! All writes are single statements (atomic per event); all reads carry a
//! total ORDER BY so that identical store state always produces identical
//! row sequences.

use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, Seniority};
use crate::models::tool::Tool;
use crate::models::usage_event::{EventFilter, UsageEvent};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, ToSql, params};

// ---------------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------------

fn parse_db_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.to_string())),
        )
    })
}

pub fn map_employee_row(row: &Row) -> Result<Employee> {
    let date_str: String = row.get("hire_date")?;
    let hire_date = parse_db_date(&date_str)?;

    let seniority_str: String = row.get("seniority")?;
    let seniority = Seniority::from_db_str(&seniority_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidSeniority(seniority_str.clone())),
        )
    })?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        department: row.get("department")?,
        role: row.get("role")?,
        seniority,
        hire_date,
        base_salary: row.get("base_salary")?,
        active: row.get::<_, i64>("active")? == 1,
    })
}

pub fn map_tool_row(row: &Row) -> Result<Tool> {
    let date_str: String = row.get("introduced_on")?;
    let introduced_on = parse_db_date(&date_str)?;

    Ok(Tool {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        vendor: row.get("vendor")?,
        monthly_cost: row.get("monthly_cost")?,
        introduced_on,
        description: row.get("description")?,
        active: row.get::<_, i64>("active")? == 1,
    })
}

pub fn map_event_row(row: &Row) -> Result<UsageEvent> {
    let date_str: String = row.get("date")?;
    let date = parse_db_date(&date_str)?;

    Ok(UsageEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        tool_id: row.get("tool_id")?,
        date,
        minutes_used: row.get("minutes_used")?,
        minutes_saved: row.get("minutes_saved")?,
        quality: row.get("quality")?,
        note: row.get("note")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, department, role, seniority, hire_date, base_salary, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            emp.name,
            emp.department,
            emp.role,
            emp.seniority.to_db_str(),
            emp.hire_date_str(),
            emp.base_salary,
            if emp.active { 1 } else { 0 },
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_employee(conn: &Connection, id: i64) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employees WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_employee_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn list_employees(
    conn: &Connection,
    department: Option<&str>,
    only_active: bool,
) -> AppResult<Vec<Employee>> {
    let mut sql = String::from("SELECT * FROM employees WHERE 1=1");
    let mut args: Vec<Box<dyn ToSql>> = Vec::new();

    if only_active {
        sql.push_str(" AND active = 1");
    }
    if let Some(dept) = department {
        sql.push_str(" AND department = ?1");
        args.push(Box::new(dept.to_string()));
    }
    sql.push_str(" ORDER BY department ASC, name ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = args.iter().map(|a| a.as_ref()).collect();
    let rows = stmt.query_map(params.as_slice(), map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn list_active_employees(
    conn: &Connection,
    department: Option<&str>,
) -> AppResult<Vec<Employee>> {
    list_employees(conn, department, true)
}

/// Administrative updates (salary / active flag). These are the only
/// mutations the dimension tables support; the usage ledger has none.
pub fn update_employee_salary(conn: &Connection, id: i64, salary: f64) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE employees SET base_salary = ?1 WHERE id = ?2",
        params![salary, id],
    )?;
    if changed == 0 {
        return Err(AppError::EmployeeNotFound(id));
    }
    Ok(())
}

pub fn set_employee_active(conn: &Connection, id: i64, active: bool) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE employees SET active = ?1 WHERE id = ?2",
        params![if active { 1 } else { 0 }, id],
    )?;
    if changed == 0 {
        return Err(AppError::EmployeeNotFound(id));
    }
    Ok(())
}

pub fn department_exists(conn: &Connection, department: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM employees WHERE department = ?1 LIMIT 1")?;
    Ok(stmt.exists([department])?)
}

/// Distinct department names, alphabetical. Drives the executive summary
/// instead of a hardcoded department list.
pub fn list_departments(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT department FROM employees ORDER BY department ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

pub fn insert_tool(conn: &Connection, tool: &Tool) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO ai_tools (name, category, vendor, monthly_cost, introduced_on, description, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            tool.name,
            tool.category,
            tool.vendor,
            tool.monthly_cost,
            tool.introduced_on_str(),
            tool.description,
            if tool.active { 1 } else { 0 },
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_tool(conn: &Connection, id: i64) -> AppResult<Option<Tool>> {
    let mut stmt = conn.prepare("SELECT * FROM ai_tools WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_tool_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn list_tools(conn: &Connection, active_only: bool) -> AppResult<Vec<Tool>> {
    let sql = if active_only {
        "SELECT * FROM ai_tools WHERE active = 1 ORDER BY name ASC, id ASC"
    } else {
        "SELECT * FROM ai_tools ORDER BY name ASC, id ASC"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_tool_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_tool_active(conn: &Connection, id: i64, active: bool) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE ai_tools SET active = ?1 WHERE id = ?2",
        params![if active { 1 } else { 0 }, id],
    )?;
    if changed == 0 {
        return Err(AppError::ToolNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Usage ledger
// ---------------------------------------------------------------------------

/// Append one usage event. Foreign keys are checked up front so an
/// unresolvable id surfaces as EmployeeNotFound / ToolNotFound rather than
/// a bare SQLite constraint error. Returns the new event id.
pub fn insert_usage_event(conn: &Connection, ev: &UsageEvent) -> AppResult<i64> {
    if get_employee(conn, ev.employee_id)?.is_none() {
        return Err(AppError::EmployeeNotFound(ev.employee_id));
    }
    if get_tool(conn, ev.tool_id)?.is_none() {
        return Err(AppError::ToolNotFound(ev.tool_id));
    }

    conn.execute(
        "INSERT INTO usage_events
             (employee_id, tool_id, date, minutes_used, minutes_saved, quality, note, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            ev.employee_id,
            ev.tool_id,
            ev.date_str(),
            ev.minutes_used,
            ev.minutes_saved,
            ev.quality,
            ev.note,
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Query the ledger. Order: date ascending, insertion order (id) on ties.
pub fn query_usage_events(conn: &Connection, filter: &EventFilter) -> AppResult<Vec<UsageEvent>> {
    let mut sql = String::from(
        "SELECT u.* FROM usage_events u
         JOIN employees e ON u.employee_id = e.id
         WHERE 1=1",
    );
    let mut args: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(emp_id) = filter.employee_id {
        args.push(Box::new(emp_id));
        sql.push_str(&format!(" AND u.employee_id = ?{}", args.len()));
    }
    if let Some(dept) = &filter.department {
        args.push(Box::new(dept.clone()));
        sql.push_str(&format!(" AND e.department = ?{}", args.len()));
    }
    if let Some((start, end)) = filter.date_range {
        args.push(Box::new(start.format("%Y-%m-%d").to_string()));
        sql.push_str(&format!(" AND u.date >= ?{}", args.len()));
        args.push(Box::new(end.format("%Y-%m-%d").to_string()));
        sql.push_str(&format!(" AND u.date <= ?{}", args.len()));
    }
    sql.push_str(" ORDER BY u.date ASC, u.id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = args.iter().map(|a| a.as_ref()).collect();
    let rows = stmt.query_map(params.as_slice(), map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        run_pending_migrations(&conn).expect("create schema");
        conn
    }

    fn employee(name: &str, department: &str, active: bool) -> Employee {
        Employee {
            id: 0,
            name: name.to_string(),
            department: department.to_string(),
            role: "Analyst".to_string(),
            seniority: Seniority::Mid,
            hire_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
            base_salary: 60000.0,
            active,
        }
    }

    fn tool(name: &str) -> crate::models::tool::Tool {
        crate::models::tool::Tool {
            id: 0,
            name: name.to_string(),
            category: "Testing".to_string(),
            vendor: String::new(),
            monthly_cost: 10.0,
            introduced_on: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            description: String::new(),
            active: true,
        }
    }

    fn event(employee_id: i64, tool_id: i64, date: &str, saved: i64) -> UsageEvent {
        UsageEvent::new(
            employee_id,
            tool_id,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            30,
            saved,
            4,
            Some("note".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn usage_event_round_trips_through_the_ledger() {
        let conn = test_conn();
        let emp_id = insert_employee(&conn, &employee("A", "Marketing", true)).unwrap();
        let tool_id = insert_tool(&conn, &tool("T")).unwrap();

        let ev = event(emp_id, tool_id, "2024-03-05", 80);
        let ev_id = insert_usage_event(&conn, &ev).unwrap();

        let filter = EventFilter {
            employee_id: Some(emp_id),
            department: None,
            date_range: Some((
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            )),
        };
        let got = query_usage_events(&conn, &filter).unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, ev_id);
        assert_eq!(got[0].minutes_used, 30);
        assert_eq!(got[0].minutes_saved, 80);
        assert_eq!(got[0].quality, 4);
        assert_eq!(got[0].note, "note");
        assert_eq!(got[0].source, "cli");
        assert_eq!(got[0].date_str(), "2024-03-05");
    }

    #[test]
    fn ledger_order_is_date_then_insertion() {
        let conn = test_conn();
        let emp_id = insert_employee(&conn, &employee("A", "Marketing", true)).unwrap();
        let tool_id = insert_tool(&conn, &tool("T")).unwrap();

        // Inserted out of date order, plus two rows sharing a date
        insert_usage_event(&conn, &event(emp_id, tool_id, "2024-03-20", 1)).unwrap();
        insert_usage_event(&conn, &event(emp_id, tool_id, "2024-03-05", 2)).unwrap();
        insert_usage_event(&conn, &event(emp_id, tool_id, "2024-03-05", 3)).unwrap();

        let got = query_usage_events(&conn, &EventFilter::default()).unwrap();
        let saved: Vec<i64> = got.iter().map(|e| e.minutes_saved).collect();
        assert_eq!(saved, vec![2, 3, 1]);
    }

    #[test]
    fn ledger_insert_rejects_unknown_ids() {
        let conn = test_conn();
        let emp_id = insert_employee(&conn, &employee("A", "Marketing", true)).unwrap();

        let err = insert_usage_event(&conn, &event(99, 1, "2024-03-05", 10)).unwrap_err();
        assert!(matches!(err, AppError::EmployeeNotFound(99)));

        let err = insert_usage_event(&conn, &event(emp_id, 99, "2024-03-05", 10)).unwrap_err();
        assert!(matches!(err, AppError::ToolNotFound(99)));
    }

    #[test]
    fn department_filter_selects_the_right_rows() {
        let conn = test_conn();
        let a = insert_employee(&conn, &employee("A", "Marketing", true)).unwrap();
        let b = insert_employee(&conn, &employee("B", "Sales", true)).unwrap();
        let tool_id = insert_tool(&conn, &tool("T")).unwrap();

        insert_usage_event(&conn, &event(a, tool_id, "2024-03-05", 10)).unwrap();
        insert_usage_event(&conn, &event(b, tool_id, "2024-03-06", 20)).unwrap();

        let filter = EventFilter {
            department: Some("Sales".to_string()),
            ..Default::default()
        };
        let got = query_usage_events(&conn, &filter).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].employee_id, b);
    }

    #[test]
    fn active_listing_excludes_inactive_employees() {
        let conn = test_conn();
        insert_employee(&conn, &employee("A", "Marketing", true)).unwrap();
        let b = insert_employee(&conn, &employee("B", "Marketing", false)).unwrap();

        let active = list_active_employees(&conn, Some("Marketing")).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "A");

        set_employee_active(&conn, b, true).unwrap();
        let active = list_active_employees(&conn, Some("Marketing")).unwrap();
        assert_eq!(active.len(), 2);
    }

    #[test]
    fn updates_on_missing_rows_are_not_found() {
        let conn = test_conn();
        assert!(matches!(
            update_employee_salary(&conn, 7, 1.0).unwrap_err(),
            AppError::EmployeeNotFound(7)
        ));
        assert!(matches!(
            set_tool_active(&conn, 7, false).unwrap_err(),
            AppError::ToolNotFound(7)
        ));
    }
}
