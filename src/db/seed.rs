//! Demo dataset seeding.
//!
//! Seeding is an explicit CLI command, never run implicitly on start; the
//! analytics core accepts whatever rows are already in the store. The usage
//! history is generated with a fixed-seed LCG so two `seed` runs over equal
//! arguments produce identical ledgers.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::today;
use chrono::Duration;
use rusqlite::params;

/// Minimal linear congruential generator (Numerical Recipes constants).
/// Enough for demo data; deliberately not a statistics-grade RNG.
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    /// Uniform value in [lo, hi] inclusive.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next() % (hi - lo + 1)
    }
}

const SAMPLE_EMPLOYEES: [(&str, &str, &str, &str, &str, f64); 8] = [
    ("Ana García", "Marketing", "Content Manager", "Senior", "2022-01-15", 75000.0),
    ("Carlos López", "Engineering", "Senior Developer", "Senior", "2021-06-01", 85000.0),
    ("María Rodríguez", "Sales", "Sales Representative", "Mid", "2023-03-10", 55000.0),
    ("Juan Martínez", "HR", "HR Specialist", "Mid", "2022-09-20", 60000.0),
    ("Laura Fernández", "Marketing", "Graphic Designer", "Junior", "2023-08-15", 45000.0),
    ("Pedro Sánchez", "Engineering", "Data Analyst", "Mid", "2022-11-30", 70000.0),
    ("Isabel Torres", "Operations", "Operations Manager", "Lead", "2020-04-12", 90000.0),
    ("Roberto Silva", "Sales", "Sales Manager", "Senior", "2021-02-28", 80000.0),
];

const SAMPLE_TOOLS: [(&str, &str, &str, f64, &str, &str); 8] = [
    ("ChatGPT Plus", "Content Generation", "OpenAI", 20.0, "2023-01-01", "AI assistant for writing and analysis"),
    ("Claude Pro", "Analysis & Writing", "Anthropic", 20.0, "2023-06-01", "Advanced conversational AI"),
    ("GitHub Copilot", "Programming", "GitHub", 10.0, "2023-02-01", "AI code assistant"),
    ("Midjourney", "Graphic Design", "Midjourney", 30.0, "2023-04-01", "AI image generation"),
    ("Jasper", "Marketing Content", "Jasper AI", 49.0, "2023-03-15", "Marketing content creation"),
    ("Notion AI", "Productivity", "Notion", 10.0, "2023-05-01", "Writing assistant inside Notion"),
    ("Grammarly Premium", "Writing", "Grammarly", 12.0, "2022-12-01", "Text correction and improvement"),
    ("DataRobot", "Data Analysis", "DataRobot", 200.0, "2023-07-01", "AutoML platform"),
];

/// Seed the demo company (8 employees, 8 tools) plus a usage history over
/// the trailing `days` days.
///
/// Refuses to touch a non-empty database unless `force` is set; even forced,
/// it only appends; nothing already in the store is updated or deleted.
pub fn seed_database(pool: &mut DbPool, days: i64, force: bool) -> AppResult<()> {
    let conn = &pool.conn;

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
    if existing > 0 && !force {
        return Err(AppError::Seed(format!(
            "database already contains {existing} employees (use --force to seed anyway)"
        )));
    }

    // Dimension rows
    let mut emp_ids = Vec::new();
    for (name, dept, role, seniority, hired, salary) in SAMPLE_EMPLOYEES {
        conn.execute(
            "INSERT INTO employees (name, department, role, seniority, hire_date, base_salary, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1)",
            params![name, dept, role, seniority, hired, salary],
        )?;
        emp_ids.push(conn.last_insert_rowid());
    }

    let mut tool_ids = Vec::new();
    for (name, category, vendor, cost, introduced, description) in SAMPLE_TOOLS {
        conn.execute(
            "INSERT INTO ai_tools (name, category, vendor, monthly_cost, introduced_on, description, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1)",
            params![name, category, vendor, cost, introduced, description],
        )?;
        tool_ids.push(conn.last_insert_rowid());
    }

    // Usage history: 5-15 events/day, 15-120 min used, 30-180 min saved,
    // quality 3-5, matching the envelope of the curated sample rows.
    let mut rng = Lcg::new(0x61697075_6c7365); // "aipulse"
    let today = today();
    let mut event_count = 0u64;

    for day_back in (0..days).rev() {
        let date = today - Duration::days(day_back);
        let date_str = date.format("%Y-%m-%d").to_string();
        let per_day = rng.range(5, 15);

        for _ in 0..per_day {
            let emp = emp_ids[rng.range(0, emp_ids.len() as u64 - 1) as usize];
            let tool = tool_ids[rng.range(0, tool_ids.len() as u64 - 1) as usize];
            let minutes_used = rng.range(15, 120) as i64;
            let minutes_saved = rng.range(30, 180) as i64;
            let quality = rng.range(3, 5) as i64;

            conn.execute(
                "INSERT INTO usage_events
                     (employee_id, tool_id, date, minutes_used, minutes_saved, quality, note, source, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, '', 'seed', ?7)",
                params![
                    emp,
                    tool,
                    date_str,
                    minutes_used,
                    minutes_saved,
                    quality,
                    chrono::Local::now().to_rfc3339(),
                ],
            )?;
            event_count += 1;
        }
    }

    ttlog(
        conn,
        "seed",
        "sample data",
        &format!(
            "Seeded {} employees, {} tools, {} usage events over {} days",
            emp_ids.len(),
            tool_ids.len(),
            event_count,
            days
        ),
    )?;

    Ok(())
}
