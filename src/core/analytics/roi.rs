//! Per-tool ROI for one department and calendar month.

use crate::config::Config;
use crate::core::analytics::rates::{hourly_cost, mean_of_present, percent};
use crate::db::pool::DbPool;
use crate::db::queries::department_exists;
use crate::errors::{AppError, AppResult};
use crate::models::reports::{ToolRoiReport, ToolRoiRow};
use crate::utils::date::month_bounds;
use rusqlite::params;

/// Compute the ROI report for `department` over month/year.
///
/// `Ok(None)` means the period simply has no usage events
/// for that department. It is a normal outcome, not an error; an unknown
/// department, by contrast, is a validation failure (a typo should not look
/// like a quiet month).
pub fn compute_tool_roi(
    pool: &mut DbPool,
    cfg: &Config,
    department: &str,
    month: u32,
    year: i32,
) -> AppResult<Option<ToolRoiReport>> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(month));
    }
    if !(1000..=9999).contains(&year) {
        return Err(AppError::InvalidYear(year));
    }
    if !department_exists(&pool.conn, department)? {
        return Err(AppError::UnknownDepartment(department.to_string()));
    }

    let (first, last) =
        month_bounds(year, month).ok_or(AppError::InvalidMonth(month))?;

    let mut stmt = pool.conn.prepare(
        "SELECT t.name,
                t.monthly_cost,
                COUNT(u.id)          AS total_uses,
                SUM(u.minutes_saved) AS minutes_saved,
                AVG(u.quality)       AS avg_quality,
                AVG(e.base_salary)   AS avg_salary
         FROM usage_events u
         JOIN employees e ON u.employee_id = e.id
         JOIN ai_tools t ON u.tool_id = t.id
         WHERE e.department = ?1
           AND u.date BETWEEN ?2 AND ?3
         GROUP BY t.id, t.name, t.monthly_cost
         ORDER BY t.name ASC, t.id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            department,
            first.format("%Y-%m-%d").to_string(),
            last.format("%Y-%m-%d").to_string(),
        ],
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, Option<f64>>(4)?,
                row.get::<_, f64>(5)?,
            ))
        },
    )?;

    let hours_per_month = cfg.hours_per_month();
    let mut tools = Vec::new();

    for r in rows {
        let (tool, monthly_cost, total_uses, minutes_saved, avg_quality, avg_salary) = r?;

        let hours_saved = minutes_saved as f64 / 60.0;
        let value_of_time_saved = hours_saved * hourly_cost(avg_salary, hours_per_month);

        // A zero-cost tool makes ROI undefined; the row is still reported.
        let roi_percent = percent(value_of_time_saved - monthly_cost, monthly_cost);

        tools.push(ToolRoiRow {
            tool,
            monthly_cost,
            total_uses,
            minutes_saved,
            hours_saved,
            avg_quality,
            avg_salary,
            value_of_time_saved,
            roi_percent,
        });
    }

    if tools.is_empty() {
        return Ok(None);
    }

    let roi_total = mean_of_present(tools.iter().map(|t| t.roi_percent));

    Ok(Some(ToolRoiReport {
        department: department.to_string(),
        month,
        year,
        tools,
        roi_total,
    }))
}
