use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for crewsight
/// CLI application to track agency attendance and activities with SQLite
#[derive(Parser)]
#[command(
    name = "crewsight",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track agency attendance and activities, derive per-employee KPIs and insights",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
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

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record or update a day's attendance for an employee
    Clock {
        /// Date of the attendance row (YYYY-MM-DD)
        date: String,

        #[arg(long = "employee", help = "Employee name (defaults to config default_employee)")]
        employee: Option<String>,

        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        clock_in: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        clock_out: Option<String>,

        #[arg(long = "break", help = "Accumulated break minutes")]
        break_minutes: Option<u32>,

        #[arg(long = "notes", help = "Free-text notes")]
        notes: Option<String>,

        #[arg(
            long = "auto",
            help = "Mark the clock-out as automatic (appends the auto clock-out marker to notes)"
        )]
        auto: bool,
    },

    /// Record a task, meeting, shooting or calendar event
    Activity {
        /// Relevant date of the activity (YYYY-MM-DD)
        date: String,

        #[arg(long = "employee", help = "Employee name (defaults to config default_employee)")]
        employee: Option<String>,

        #[arg(long = "kind", help = "Activity kind: task, meeting, shooting, event")]
        kind: String,

        #[arg(long = "title", help = "Activity title")]
        title: String,

        #[arg(long = "project", help = "Project id (omit for the no-project bucket)")]
        project: Option<String>,

        #[arg(
            long = "project-title",
            requires = "project",
            help = "Project display title (defaults to the project id)"
        )]
        project_title: Option<String>,

        #[arg(long = "deadline", help = "Deadline date for tasks (YYYY-MM-DD)")]
        deadline: Option<String>,

        #[arg(
            long = "status",
            default_value = "todo",
            help = "Status: todo, in_progress, scheduled, done, completed, cancelled"
        )]
        status: String,
    },

    /// Print KPIs, insights and project contributions for a period
    Report {
        #[arg(long = "employee", help = "Employee name (defaults to config default_employee)")]
        employee: Option<String>,

        #[arg(
            long = "period",
            help = "Period: YYYY, YYYY-MM, YYYY-MM-DD or start:end (defaults to current month)"
        )]
        period: Option<String>,

        #[arg(long = "json", help = "Print the full report as JSON")]
        json: bool,
    },

    /// Export a period report to csv, json or xlsx
    Export {
        #[arg(long = "employee", help = "Employee name (defaults to config default_employee)")]
        employee: Option<String>,

        #[arg(long = "period", help = "Period expression (defaults to current month)")]
        period: Option<String>,

        #[arg(long = "format", value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long = "file", help = "Absolute path of the output file")]
        file: String,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}
