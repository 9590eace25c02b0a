use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rLitterbox
/// CLI application to track litter-box maintenance with SQLite
#[derive(Parser)]
#[command(
    name = "rlitterbox",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple litter-box tracking CLI: log scoop/clean events and see when each box is due again",
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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Print the internal audit journal
    Journal {
        #[arg(long = "print", help = "Print rows from the internal journal table")]
        print: bool,
    },

    /// Show the dashboard: every box with its event log and reminders
    Status {
        /// Show a single box instead of all of them
        #[arg(long = "box")]
        box_id: Option<u32>,
    },

    /// Rename a box (an empty name keeps the current one)
    Rename {
        /// Box id (1-6)
        box_id: u32,

        /// New display name
        name: String,
    },

    /// Log an activity for a box
    Log {
        /// Box id (1-6)
        box_id: u32,

        /// Activity: scooped or cleaned
        activity: String,

        /// Timestamp override (RFC 3339, e.g. 2024-01-01T00:00:00Z); defaults to now
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Log an event from a deep-link query (e.g. "box=3&activity=scooped")
    Link {
        /// Query string or URL carrying box= and activity= parameters
        query: String,
    },

    /// List the full event log of one box
    List {
        /// Box id (1-6)
        box_id: u32,
    },

    /// Export event data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict the export to one box
        #[arg(long = "box")]
        box_id: Option<u32>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Fire the one-shot demo reminder
    Notify {
        /// Delay in seconds before the reminder fires (defaults to the configured value)
        #[arg(long)]
        delay: Option<u64>,
    },
}
