//! dutylog library root.
//! Exposes the log grid model and controller, the CLI parser and the
//! high-level run() function used by the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::{GridOptions, LogGridController, PointerHandler};
pub use models::{DutyStatus, HourTotals, SlotSequence};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Totals { .. } => cli::commands::totals::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Segments { .. } => cli::commands::segments::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once, then command-line overrides are applied
    let path = Config::resolve_path(cli.config.as_deref());
    let mut cfg = Config::load(&path)?;

    if let Some(w) = cli.width {
        cfg.surface_width = w;
    }
    if let Some(h) = cli.height {
        cfg.surface_height = h;
    }
    if cli.no_color {
        cfg.color = false;
    }
    cfg.validate()?;
    ui::messages::set_color(cfg.color);

    dispatch(&cli, &cfg)
}
