use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCalendar
/// Lay out date-ranged sessions on a month grid without collisions
#[derive(Parser)]
#[command(
    name = "rcalendar",
    version = env!("CARGO_PKG_VERSION"),
    about = "A calendar layout CLI: stack multi-day sessions on a month grid without overlaps",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the first day of the week (monday | sunday)
    #[arg(global = true, long = "week-start", value_name = "DAY")]
    pub week_start: Option<String>,

    /// Disable ANSI colors in the output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Print the month grid (leading and trailing days included)
    Grid {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,
    },

    /// Lay out sessions on the month grid
    Layout {
        #[arg(long, short = 'F', value_name = "FILE", help = "Sessions JSON file")]
        file: Option<String>,

        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(
            long,
            short,
            value_name = "YYYY-MM-DD",
            help = "Show the placement table of a single day"
        )]
        day: Option<String>,

        #[arg(long, short, help = "Do not report skipped sessions")]
        quiet: bool,
    },

    /// Export every (day, session) placement of a month
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, short, value_name = "FILE", help = "Destination file")]
        out: String,

        #[arg(long, short = 'F', value_name = "FILE", help = "Sessions JSON file")]
        file: Option<String>,

        #[arg(long, short, value_name = "YYYY-MM", help = "Month to export (default: current)")]
        month: Option<String>,

        #[arg(long, short, help = "Overwrite the destination without asking")]
        force: bool,
    },
}
