//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month (expected 1-12): {0}")]
    InvalidMonth(u32),

    #[error("Invalid year (expected a four-digit year): {0}")]
    InvalidYear(i32),

    #[error("Quality score out of range (expected 1-5): {0}")]
    InvalidQuality(i64),

    #[error("Minutes must be non-negative: {0}")]
    NegativeMinutes(i64),

    #[error("Invalid seniority tier: {0} (expected Junior, Mid, Senior or Lead)")]
    InvalidSeniority(String),

    // ---------------------------
    // Lookup failures
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),

    #[error("Tool not found: {0}")]
    ToolNotFound(i64),

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Seed / export errors
    // ---------------------------
    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
