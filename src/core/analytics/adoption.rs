//! Company-wide adoption trends: monthly series, departmental breakdown,
//! tool popularity and a global summary.

use crate::core::analytics::rates::{percent, round2};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::reports::{
    AdoptionSummary, AdoptionTrendReport, DepartmentAdoptionRow, MonthlyAdoptionRow,
    ToolPopularityRow,
};
use crate::utils::date::{month_keys_back, today};
use std::cmp::Ordering;
use std::collections::HashMap;

pub fn compute_adoption_trends(
    pool: &mut DbPool,
    lookback_months: u32,
) -> AppResult<AdoptionTrendReport> {
    let monthly = monthly_series(pool, lookback_months)?;
    let departments = department_breakdown(pool)?;
    let tools = tool_popularity(pool)?;
    let summary = global_summary(pool)?;

    Ok(AdoptionTrendReport {
        monthly,
        departments,
        tools,
        summary,
    })
}

/// One row per calendar month in the lookback window (current month
/// included). Months without events are zero rows, not holes.
fn monthly_series(pool: &mut DbPool, lookback_months: u32) -> AppResult<Vec<MonthlyAdoptionRow>> {
    let keys = month_keys_back(today(), lookback_months.max(1));
    let first_key = keys[0].clone();

    let mut stmt = pool.conn.prepare(
        "SELECT strftime('%Y-%m', date)       AS month,
                COUNT(DISTINCT employee_id)   AS distinct_users,
                COUNT(id)                     AS total_uses,
                SUM(minutes_saved)            AS minutes_saved
         FROM usage_events
         WHERE strftime('%Y-%m', date) >= ?1
         GROUP BY strftime('%Y-%m', date)
         ORDER BY month ASC",
    )?;

    let rows = stmt.query_map([first_key], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, i64>(2)?,
            row.get::<_, i64>(3)?,
        ))
    })?;

    let mut by_month: HashMap<String, (i64, i64, i64)> = HashMap::new();
    for r in rows {
        let (month, users, uses, saved) = r?;
        by_month.insert(month, (users, uses, saved));
    }

    Ok(keys
        .into_iter()
        .map(|month| {
            let (distinct_users, total_uses, minutes_saved) =
                by_month.get(&month).copied().unwrap_or((0, 0, 0));
            MonthlyAdoptionRow {
                month,
                distinct_users,
                total_uses,
                minutes_saved,
            }
        })
        .collect())
}

/// Share of each department's active headcount that has ever logged a usage
/// event. Ordered by adoption percentage descending, name ascending on ties;
/// departments with an undefined percentage (no headcount) sort last.
fn department_breakdown(pool: &mut DbPool) -> AppResult<Vec<DepartmentAdoptionRow>> {
    let mut stmt = pool.conn.prepare(
        "SELECT e.department,
                COUNT(DISTINCT u.employee_id)     AS ai_users,
                COUNT(DISTINCT e.id)              AS headcount,
                COALESCE(SUM(u.minutes_saved), 0) AS minutes_saved
         FROM employees e
         LEFT JOIN usage_events u ON e.id = u.employee_id
         WHERE e.active = 1
         GROUP BY e.department",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, i64>(2)?,
            row.get::<_, i64>(3)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (department, ai_users, headcount, minutes_saved) = r?;
        let adoption_percent = percent(ai_users as f64, headcount as f64).map(round2);

        out.push(DepartmentAdoptionRow {
            department,
            ai_users,
            headcount,
            adoption_percent,
            minutes_saved,
        });
    }

    out.sort_by(|a, b| match (b.adoption_percent, a.adoption_percent) {
        (Some(x), Some(y)) => x
            .partial_cmp(&y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.department.cmp(&b.department)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.department.cmp(&b.department),
    });

    Ok(out)
}

/// Every tool with at least one usage event, most adopted first.
fn tool_popularity(pool: &mut DbPool) -> AppResult<Vec<ToolPopularityRow>> {
    let mut stmt = pool.conn.prepare(
        "SELECT t.name,
                t.category,
                COUNT(DISTINCT u.employee_id) AS distinct_users,
                COUNT(u.id)                   AS total_uses,
                AVG(u.quality)                AS avg_quality
         FROM ai_tools t
         JOIN usage_events u ON t.id = u.tool_id
         GROUP BY t.id, t.name, t.category
         ORDER BY distinct_users DESC, total_uses DESC, t.name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(ToolPopularityRow {
            tool: row.get(0)?,
            category: row.get(1)?,
            distinct_users: row.get(2)?,
            total_uses: row.get(3)?,
            avg_quality: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn global_summary(pool: &mut DbPool) -> AppResult<AdoptionSummary> {
    let active_employees: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM employees WHERE active = 1", [], |row| {
                row.get(0)
            })?;

    let ai_users: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT u.employee_id)
         FROM usage_events u
         JOIN employees e ON u.employee_id = e.id
         WHERE e.active = 1",
        [],
        |row| row.get(0),
    )?;

    let adoption_percent = percent(ai_users as f64, active_employees as f64).map(round2);

    Ok(AdoptionSummary {
        ai_users,
        active_employees,
        adoption_percent,
    })
}
