use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

use crate::cli::parser::Commands;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        println!("⚙️  Initializing rCalendar…");

        if Config::init_at(cfg_path, *force)? {
            success("rCalendar initialization completed!");
        } else {
            info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                cfg_path.display()
            ));
        }
    }
    Ok(())
}
