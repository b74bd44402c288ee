use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for aipulse
/// CLI application to track AI tool adoption and productivity ROI with SQLite
#[derive(Parser)]
#[command(
    name = "aipulse",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track AI tool adoption across a company and measure productivity ROI from usage logs",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Audit {
        #[arg(long = "print", help = "Print rows from the internal audit table")]
        print: bool,
    },

    /// Register a new employee
    Hire {
        /// Full name
        name: String,

        #[arg(long = "dept", help = "Department the employee belongs to")]
        department: String,

        #[arg(long = "role", help = "Job title")]
        role: String,

        #[arg(
            long = "seniority",
            help = "Seniority tier: Junior, Mid, Senior or Lead"
        )]
        seniority: String,

        #[arg(long = "hired", help = "Hire date (YYYY-MM-DD)")]
        hired: String,

        #[arg(long = "salary", help = "Annual base salary")]
        salary: f64,
    },

    /// Register a new AI tool
    Adopt {
        /// Tool name
        name: String,

        #[arg(long = "category", help = "Tool category")]
        category: String,

        #[arg(long = "vendor", default_value = "", help = "Vendor name")]
        vendor: String,

        #[arg(long = "cost", help = "Monthly cost per seat bundle")]
        cost: f64,

        #[arg(long = "introduced", help = "Introduction date (YYYY-MM-DD)")]
        introduced: String,

        #[arg(long = "description", help = "Free-text description")]
        description: Option<String>,
    },

    /// List employees
    Employees {
        #[arg(long = "dept", help = "Filter by department")]
        department: Option<String>,

        #[arg(long = "all", help = "Include inactive employees")]
        all: bool,
    },

    /// List AI tools, or retire one
    Tools {
        #[arg(long = "all", help = "Include inactive tools")]
        all: bool,

        #[arg(long = "retire", help = "Mark the given tool id inactive")]
        retire: Option<i64>,
    },

    /// Administrative employee updates (salary, active flag)
    Hr {
        /// Employee id
        id: i64,

        #[arg(long = "salary", help = "Set a new annual base salary")]
        salary: Option<f64>,

        #[arg(long = "active", help = "Set the active flag (true|false)")]
        active: Option<bool>,
    },

    /// Log one AI tool usage event (append-only)
    Log {
        /// Employee id
        employee_id: i64,

        /// Tool id
        tool_id: i64,

        // Negative values must reach the validating constructor so the
        // error names the field, instead of clap rejecting the token.
        #[arg(
            long = "used",
            allow_negative_numbers = true,
            help = "Minutes spent using the tool"
        )]
        minutes_used: i64,

        #[arg(
            long = "saved",
            allow_negative_numbers = true,
            help = "Minutes of work the tool saved"
        )]
        minutes_saved: i64,

        #[arg(long = "quality", help = "Output quality score (1-5)")]
        quality: i64,

        #[arg(long = "date", help = "Usage date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "note", help = "Optional free-text note")]
        note: Option<String>,
    },

    /// Seed the demo dataset (8 employees, 8 tools, usage history)
    Seed {
        #[arg(
            long = "days",
            default_value = "30",
            help = "Days of usage history to generate"
        )]
        days: i64,

        #[arg(long = "force", help = "Seed even if the database is not empty")]
        force: bool,
    },

    /// Per-tool ROI for a department and month
    Roi {
        /// Department name
        department: String,

        #[arg(long = "month", help = "Month (1-12)")]
        month: u32,

        #[arg(long = "year", help = "Four-digit year")]
        year: i32,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Per-employee productivity dashboard
    Dashboard {
        /// Employee id
        employee_id: i64,

        #[arg(long = "window", help = "Trailing window in days (default 30)")]
        window: Option<i64>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Company-wide adoption trends
    Trends {
        #[arg(long = "months", help = "Lookback in months (default 6)")]
        months: Option<u32>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Executive summary (adoption, top departments/tools, ROI)
    Summary {
        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the usage ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
