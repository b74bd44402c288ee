// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::UsageExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::params;
use std::path::Path;

/// High-level export logic for the usage ledger.
pub struct ExportLogic;

impl ExportLogic {
    /// Export usage events.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or expressions such as:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_usage(pool, date_bounds)?;

        if rows.is_empty() {
            warning("⚠️  No usage events found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}

/// Load ledger rows with names joined, within the optional bounds.
fn load_usage(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<UsageExport>> {
    let conn = &mut pool.conn;

    const BASE: &str = "SELECT u.id, u.date, e.name, e.department, t.name,
                u.minutes_used, u.minutes_saved, u.quality, u.note, u.source
         FROM usage_events u
         JOIN employees e ON u.employee_id = e.id
         JOIN ai_tools t ON u.tool_id = t.id";

    let mut rows_out = Vec::new();

    match bounds {
        None => {
            let sql = format!("{BASE} ORDER BY u.date ASC, u.id ASC");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], map_row)?;

            for r in rows {
                rows_out.push(r?);
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let sql = format!(
                "{BASE} WHERE u.date BETWEEN ?1 AND ?2 ORDER BY u.date ASC, u.id ASC"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![start_str, end_str], map_row)?;

            for r in rows {
                rows_out.push(r?);
            }
        }
    }

    Ok(rows_out)
}

/// Mapping DB → UsageExport (reused for all queries).
fn map_row(row: &Row<'_>) -> rusqlite::Result<UsageExport> {
    Ok(UsageExport {
        id: row.get(0)?,
        date: row.get(1)?,
        employee: row.get(2)?,
        department: row.get(3)?,
        tool: row.get(4)?,
        minutes_used: row.get(5)?,
        minutes_saved: row.get(6)?,
        quality: row.get(7)?,
        note: row.get(8)?,
        source: row.get(9)?,
    })
}
