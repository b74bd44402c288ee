// src/export/model.rs

use serde::Serialize;

/// Flat row for exporting the usage ledger, with employee and tool names
/// joined in so the file is readable without the database.
#[derive(Serialize, Clone, Debug)]
pub struct UsageExport {
    pub id: i64,
    pub date: String,
    pub employee: String,
    pub department: String,
    pub tool: String,
    pub minutes_used: i64,
    pub minutes_saved: i64,
    pub quality: i64,
    pub note: String,
    pub source: String,
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "employee",
        "department",
        "tool",
        "minutes_used",
        "minutes_saved",
        "quality",
        "note",
        "source",
    ]
}

pub(crate) fn usage_to_row(u: &UsageExport) -> Vec<String> {
    vec![
        u.id.to_string(),
        u.date.clone(),
        u.employee.clone(),
        u.department.clone(),
        u.tool.clone(),
        u.minutes_used.to_string(),
        u.minutes_saved.to_string(),
        u.quality.to_string(),
        u.note.clone(),
        u.source.clone(),
    ]
}
