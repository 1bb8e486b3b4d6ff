//! Path utilities: expand ~, resolve the sessions input file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `--file` wins over `sessions_file` from the config.
pub fn resolve_sessions_file(file: &Option<String>, cfg: &Config) -> AppResult<PathBuf> {
    file.as_deref()
        .or(cfg.sessions_file.as_deref())
        .map(expand_tilde)
        .ok_or(AppError::MissingSessionsFile)
}
