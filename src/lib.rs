//! rCalendar library root.
//! Exposes the layout engine (`core`), the session loader (`io`), the
//! renderers, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod io;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Grid { .. } => cli::commands::grid::handle(&cli.command, cfg),
        Commands::Layout { .. } => cli::commands::layout::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    if cli.no_color {
        ui::messages::set_color_enabled(false);
    }

    // 2️⃣ config path: --config or the platform default
    let cfg_path = match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };

    // 3️⃣ load config ONCE (init must work even with a broken file)
    let mut cfg = match &cli.command {
        Commands::Init { .. } => Config::load_from(&cfg_path).unwrap_or_default(),
        _ => Config::load_from(&cfg_path)?,
    };

    // 4️⃣ command-line overrides
    if let Some(ws) = &cli.week_start {
        cfg.week_start = ws.parse()?;
    }
    if cli.no_color {
        cfg.color_output = false;
    }
    ui::messages::set_color_enabled(cfg.color_output);

    dispatch(&cli, &cfg, &cfg_path)
}
