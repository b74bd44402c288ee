use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub vendor: String,
    pub monthly_cost: f64,        // ⇔ ai_tools.monthly_cost (REAL, per seat bundle)
    pub introduced_on: NaiveDate, // ⇔ ai_tools.introduced_on (TEXT "YYYY-MM-DD")
    pub description: String,      // ⇔ ai_tools.description (TEXT, default '')
    pub active: bool,             // ⇔ ai_tools.active (INTEGER 0/1)
}

impl Tool {
    pub fn introduced_on_str(&self) -> String {
        self.introduced_on.format("%Y-%m-%d").to_string()
    }
}
