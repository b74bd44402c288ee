use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One logged interaction between an employee and an AI tool.
///
/// Rows are append-only: once written they are never updated or deleted, so
/// any report over a closed period can be recomputed bit-for-bit from the
/// ledger alone.
#[derive(Debug, Clone, Serialize)]
pub struct UsageEvent {
    pub id: i64,             // ⇔ usage_events.id (AUTOINCREMENT, insertion order)
    pub employee_id: i64,    // ⇔ usage_events.employee_id (FK employees)
    pub tool_id: i64,        // ⇔ usage_events.tool_id (FK ai_tools)
    pub date: NaiveDate,     // ⇔ usage_events.date (TEXT "YYYY-MM-DD")
    pub minutes_used: i64,   // ⇔ usage_events.minutes_used (INT >= 0)
    pub minutes_saved: i64,  // ⇔ usage_events.minutes_saved (INT >= 0)
    pub quality: i64,        // ⇔ usage_events.quality (INT 1-5)
    pub note: String,        // ⇔ usage_events.note (TEXT, default '')
    pub source: String,      // ⇔ usage_events.source (TEXT, default 'cli')
    pub created_at: String,  // ⇔ usage_events.created_at (TEXT, RFC3339)
}

impl UsageEvent {
    /// Validating constructor for events created by the CLI.
    /// - Rejects quality outside 1..=5 and negative minute counts
    /// - Sets `id = 0` (assigned by the DB on insert)
    /// - Sets `source = "cli"` and `created_at = now()` in RFC3339
    pub fn new(
        employee_id: i64,
        tool_id: i64,
        date: NaiveDate,
        minutes_used: i64,
        minutes_saved: i64,
        quality: i64,
        note: Option<String>,
    ) -> AppResult<Self> {
        if !(1..=5).contains(&quality) {
            return Err(AppError::InvalidQuality(quality));
        }
        if minutes_used < 0 {
            return Err(AppError::NegativeMinutes(minutes_used));
        }
        if minutes_saved < 0 {
            return Err(AppError::NegativeMinutes(minutes_saved));
        }

        Ok(Self {
            id: 0,
            employee_id,
            tool_id,
            date,
            minutes_used,
            minutes_saved,
            quality,
            note: note.unwrap_or_default(),
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        })
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Filter for `query_usage_events`. Empty filter returns the whole ledger,
/// always ordered by date ascending, insertion order on ties.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub employee_id: Option<i64>,
    pub department: Option<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}
