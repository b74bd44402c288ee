//! Per-employee efficiency dashboard over a trailing window.

use crate::db::pool::DbPool;
use crate::db::queries::get_employee;
use crate::errors::{AppError, AppResult};
use crate::models::reports::{DashboardToolRow, EmployeeDashboard};
use crate::utils::date::today;
use chrono::Duration;
use rusqlite::params;

/// Compute the dashboard for one employee over `[today - window_days, today]`.
///
/// An unknown employee id is a NotFound error; an employee with no events in
/// the window gets a zeroed dashboard (tools 0, hours 0, score 0): zero data
/// is a valid answer, absence of the employee is not.
pub fn compute_employee_dashboard(
    pool: &mut DbPool,
    employee_id: i64,
    window_days: i64,
) -> AppResult<EmployeeDashboard> {
    let employee = get_employee(&pool.conn, employee_id)?
        .ok_or(AppError::EmployeeNotFound(employee_id))?;

    let end = today();
    let start = end - Duration::days(window_days);

    let mut stmt = pool.conn.prepare(
        "SELECT t.name,
                COUNT(u.id)          AS uses,
                SUM(u.minutes_used)  AS minutes_used,
                SUM(u.minutes_saved) AS minutes_saved,
                AVG(u.quality)       AS avg_quality
         FROM usage_events u
         JOIN ai_tools t ON u.tool_id = t.id
         WHERE u.employee_id = ?1
           AND u.date BETWEEN ?2 AND ?3
         GROUP BY t.id, t.name
         ORDER BY minutes_saved DESC, t.name ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        |row| {
            Ok(DashboardToolRow {
                tool: row.get(0)?,
                uses: row.get(1)?,
                minutes_used: row.get(2)?,
                minutes_saved: row.get(3)?,
                avg_quality: row.get(4)?,
            })
        },
    )?;

    let mut tools = Vec::new();
    for r in rows {
        tools.push(r?);
    }

    let total_minutes_saved: i64 = tools.iter().map(|t| t.minutes_saved).sum();
    let hours_saved = total_minutes_saved as f64 / 60.0;

    let avg_quality = if tools.is_empty() {
        None
    } else {
        Some(tools.iter().map(|t| t.avg_quality).sum::<f64>() / tools.len() as f64)
    };

    // Bounded linear proxy: 10 points per hour saved, capped at 100.
    // A placeholder heuristic, not a validated productivity model.
    let efficiency_score = (hours_saved * 10.0).min(100.0);

    Ok(EmployeeDashboard {
        employee_id: employee.id,
        name: employee.name,
        department: employee.department,
        role: employee.role,
        seniority: employee.seniority.to_db_str().to_string(),
        window_days,
        since: start.format("%Y-%m-%d").to_string(),
        tools_used: tools.len() as i64,
        tools,
        hours_saved,
        avg_quality,
        efficiency_score,
    })
}
