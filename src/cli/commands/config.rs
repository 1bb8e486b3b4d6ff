use crate::config::Config;
use crate::config::migrate::{missing_fields, run_config_migrations};
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

use crate::cli::parser::Commands;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", cfg_path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if (*check || *migrate) && !cfg_path.exists() {
            return Err(AppError::Config(format!(
                "{} not found, run `rcalendar init` first",
                cfg_path.display()
            )));
        }

        // ---- CHECK ----
        if *check {
            let missing = missing_fields(cfg_path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            run_config_migrations(cfg_path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(cfg_path, editor)?;
        }
    }

    Ok(())
}
