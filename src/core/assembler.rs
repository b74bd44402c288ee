//! Report assembler: shapes aggregator output into the executive summary.
//! It never re-derives numbers; it only selects, ranks and composes.

use crate::config::Config;
use crate::core::analytics::{compute_adoption_trends, compute_tool_roi};
use crate::db::pool::DbPool;
use crate::db::queries::list_departments;
use crate::errors::AppResult;
use crate::models::reports::{DepartmentRoi, ExecutiveSummary};
use crate::utils::date::today;
use chrono::Datelike;

/// Build the composite executive summary: adoption trends, top-3 departments
/// by adoption, top-3 tools by usage, and current-month ROI per department.
///
/// Departments are discovered from the employees table. A department with no
/// usage this month is kept as a `roi_total: None` entry; one missing data
/// point never aborts the whole summary.
pub fn build_executive_summary(pool: &mut DbPool, cfg: &Config) -> AppResult<ExecutiveSummary> {
    let now = today();
    let (month, year) = (now.month(), now.year());

    let trends = compute_adoption_trends(pool, cfg.default_lookback_months)?;

    let top_departments = trends.departments.iter().take(3).cloned().collect();
    let top_tools = trends.tools.iter().take(3).cloned().collect();

    let mut department_roi = Vec::new();
    for department in list_departments(&pool.conn)? {
        let roi_total = compute_tool_roi(pool, cfg, &department, month, year)?
            .and_then(|report| report.roi_total);

        department_roi.push(DepartmentRoi {
            department,
            roi_total,
        });
    }

    Ok(ExecutiveSummary {
        month,
        year,
        adoption: trends.summary,
        top_departments,
        top_tools,
        department_roi,
    })
}
