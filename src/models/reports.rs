//! Derived-metric result types.
//!
//! Everything in this module is ephemeral: computed on demand from the
//! `usage_events` ledger plus the dimension tables, never persisted, never
//! cached. Fields of type `Option<f64>` carry undefined ratios: a `None`
//! means the denominator was zero (or a tool costs nothing), and is rendered
//! as "n/a" / serialized as `null`. A genuine 0.0 only ever appears when the
//! denominator was nonzero.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Tool ROI (per department, per calendar month)
// ---------------------------------------------------------------------------

/// One tool's aggregate for a department+month slice of the ledger.
#[derive(Debug, Clone, Serialize)]
pub struct ToolRoiRow {
    pub tool: String,
    pub monthly_cost: f64,
    pub total_uses: i64,
    pub minutes_saved: i64,
    pub hours_saved: f64,
    pub avg_quality: Option<f64>,
    /// Average base salary over the matched usage rows (per-event weighting).
    pub avg_salary: f64,
    /// (minutes_saved / 60) × hourly cost of the employees involved.
    pub value_of_time_saved: f64,
    /// None when monthly_cost == 0 (ROI not computable).
    pub roi_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolRoiReport {
    pub department: String,
    pub month: u32,
    pub year: i32,
    pub tools: Vec<ToolRoiRow>,
    /// Mean of the computable per-tool ROI percentages.
    pub roi_total: Option<f64>,
}

// ---------------------------------------------------------------------------
// Employee dashboard (trailing window)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct DashboardToolRow {
    pub tool: String,
    pub uses: i64,
    pub minutes_used: i64,
    pub minutes_saved: i64,
    pub avg_quality: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeDashboard {
    pub employee_id: i64,
    pub name: String,
    pub department: String,
    pub role: String,
    pub seniority: String,
    pub window_days: i64,
    /// First day of the analysis window (inclusive).
    pub since: String,
    pub tools: Vec<DashboardToolRow>,
    pub tools_used: i64,
    pub hours_saved: f64,
    pub avg_quality: Option<f64>,
    /// min(100, hours_saved × 10). A bounded linear proxy, kept as a
    /// placeholder heuristic, not a validated productivity model.
    pub efficiency_score: f64,
}

// ---------------------------------------------------------------------------
// Adoption trends (company-wide)
// ---------------------------------------------------------------------------

/// One calendar month of the trend series. Months without any usage are
/// present with zeroed counters, so zero data never collapses into no data.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyAdoptionRow {
    /// "YYYY-MM"
    pub month: String,
    pub distinct_users: i64,
    pub total_uses: i64,
    pub minutes_saved: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentAdoptionRow {
    pub department: String,
    pub ai_users: i64,
    pub headcount: i64,
    /// round2(100 × ai_users / headcount); None when headcount is 0.
    pub adoption_percent: Option<f64>,
    pub minutes_saved: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolPopularityRow {
    pub tool: String,
    pub category: String,
    pub distinct_users: i64,
    pub total_uses: i64,
    pub avg_quality: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdoptionSummary {
    pub ai_users: i64,
    pub active_employees: i64,
    /// None when there are no active employees at all.
    pub adoption_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdoptionTrendReport {
    pub monthly: Vec<MonthlyAdoptionRow>,
    pub departments: Vec<DepartmentAdoptionRow>,
    pub tools: Vec<ToolPopularityRow>,
    pub summary: AdoptionSummary,
}

// ---------------------------------------------------------------------------
// Executive summary
// ---------------------------------------------------------------------------

/// Current-month ROI entry for one department. `roi_total: None` covers both
/// "no usage data this month" and "no computable ROI"; the summary degrades
/// that single entry instead of aborting.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRoi {
    pub department: String,
    pub roi_total: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveSummary {
    pub month: u32,
    pub year: i32,
    pub adoption: AdoptionSummary,
    pub top_departments: Vec<DepartmentAdoptionRow>,
    pub top_tools: Vec<ToolPopularityRow>,
    pub department_roi: Vec<DepartmentRoi>,
}
