use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for dutylog
/// Terminal host for the driver daily log grid
#[derive(Parser)]
#[command(
    name = "dutylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Driver daily log grid: draw duty-status lines over 96 fifteen-minute slots and total the hours",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Drawing surface width in pixels (overrides config)
    #[arg(global = true, long = "width", value_name = "PX")]
    pub width: Option<f64>,

    /// Drawing surface height in pixels (overrides config)
    #[arg(global = true, long = "height", value_name = "PX")]
    pub height: Option<f64>,

    /// Disable ANSI colors
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
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

    /// Draw the log grid and the duty line in the terminal
    Show {
        /// Encoded log: 96 digits, 1=off duty 2=sleeper 3=driving 4=on duty
        #[arg(long, value_name = "ENCODED")]
        log: Option<String>,

        #[arg(long = "read-only", help = "Render the line in read-only style")]
        read_only: bool,
    },

    /// Print hours per duty status
    Totals {
        #[arg(long, value_name = "ENCODED")]
        log: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Apply pointer gestures to a log and print the new encoding
    Edit {
        #[arg(long, value_name = "ENCODED")]
        log: Option<String>,

        /// Pixel gesture "x,y x,y ...": pointer down on the first point,
        /// moves through the rest, then pointer up. Repeatable.
        #[arg(long = "drag", value_name = "POINTS", conflicts_with = "slots")]
        drag: Vec<String>,

        /// Slot span to paint, as "A-B" slot indexes or "HH:MM-HH:MM"
        #[arg(long, value_name = "SPAN", requires = "duty")]
        slots: Option<String>,

        /// Duty to paint with --slots: 1-4, off, sb, d, on
        #[arg(long, value_name = "DUTY", requires = "slots")]
        duty: Option<String>,

        #[arg(long, help = "End --drag gestures with pointer-leave instead of pointer-up")]
        leave: bool,

        #[arg(long = "read-only", help = "Open the grid read-only (gestures are ignored)")]
        read_only: bool,

        #[arg(long, help = "Print the edit journal")]
        journal: bool,

        #[arg(long, help = "Draw the resulting grid")]
        show: bool,
    },

    /// Dump drawing segments as JSON for an external renderer
    Segments {
        #[arg(long, value_name = "ENCODED")]
        log: Option<String>,

        #[arg(long, help = "Include the static background grid")]
        grid: bool,

        #[arg(long = "read-only")]
        read_only: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}
