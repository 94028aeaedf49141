use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for paytrack
/// CLI application to clock employees in/out and run weekly payroll with SQLite
#[derive(Parser)]
#[command(
    name = "paytrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple payroll CLI: clock sessions in and out, compute pay and weekly summaries using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the CSV export file that mirrors every payroll entry
    #[arg(global = true, long = "export-file", value_name = "FILE")]
    pub export_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the current time (YYYY-MM-DDTHH:MM:SS), for reproducible runs
    #[arg(global = true, long = "at", hide = true, value_name = "TIMESTAMP")]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Clock an employee in (Start Session)
    Start {
        /// Employee name (case-insensitive)
        name: String,
    },

    /// Clock an employee out and record the payroll entry (End Session)
    End {
        /// Employee name (case-insensitive)
        name: String,

        /// Hourly rate for the session
        #[arg(long, short = 'r', value_name = "RATE", allow_hyphen_values = true)]
        rate: Option<String>,
    },

    /// Summarize the current Sunday-to-Saturday week (Run Payroll)
    Payroll {
        /// Directory for the weekly markdown report (overrides config)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        /// Show the summary without writing the report file
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// List payroll entries or open sessions
    List {
        #[arg(
            long,
            value_name = "PERIOD",
            help = "YYYY, YYYY-MM, YYYY-MM-DD, a range A:B, or 'all' (default: current month)"
        )]
        period: Option<String>,

        #[arg(long, help = "List sessions that are still open")]
        open: bool,
    },

    /// Export payroll entries to CSV or JSON
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

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Maintain the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
