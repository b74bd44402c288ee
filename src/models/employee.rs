use chrono::NaiveDate;
use serde::Serialize;

/// Seniority tiers recognized by the `employees` table CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl Seniority {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
            Seniority::Lead => "Lead",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Junior" => Some(Seniority::Junior),
            "Mid" => Some(Seniority::Mid),
            "Senior" => Some(Seniority::Senior),
            "Lead" => Some(Seniority::Lead),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (any casing)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "junior" => Some(Seniority::Junior),
            "mid" => Some(Seniority::Mid),
            "senior" => Some(Seniority::Senior),
            "lead" => Some(Seniority::Lead),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub role: String,
    pub seniority: Seniority,  // ⇔ employees.seniority ('Junior'..'Lead')
    pub hire_date: NaiveDate,  // ⇔ employees.hire_date (TEXT "YYYY-MM-DD")
    pub base_salary: f64,      // ⇔ employees.base_salary (REAL, annual)
    pub active: bool,          // ⇔ employees.active (INTEGER 0/1)
}

impl Employee {
    pub fn hire_date_str(&self) -> String {
        self.hire_date.format("%Y-%m-%d").to_string()
    }
}
