use crate::core::grid::WeekStart;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // missing-field check and upgrade, src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_color")]
    pub default_color: String,
    #[serde(default = "default_type_label")]
    pub default_type_label: String,
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default = "default_color_output")]
    pub color_output: bool,
    #[serde(default)]
    pub sessions_file: Option<String>,
}

fn default_color() -> String {
    "blue".to_string()
}
fn default_type_label() -> String {
    "Sesión".to_string()
}
fn default_cell_width() -> usize {
    12
}
fn default_color_output() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            default_color: default_color(),
            default_type_label: default_type_label(),
            cell_width: default_cell_width(),
            color_output: default_color_output(),
            sessions_file: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcalendar")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcalendar")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcalendar.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;

        if cfg.cell_width < 4 {
            return Err(AppError::Config(format!(
                "cell_width must be at least 4 (found {})",
                cfg.cell_width
            )));
        }

        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        fs::write(path, self.to_yaml()?).map_err(|_| AppError::ConfigSave)
    }

    /// Write a default configuration file at `path`.
    /// An existing file is kept unless `force` is set.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        Config::default().save_to(path)?;
        success(format!("Config file: {}", path.display()));
        Ok(true)
    }
}
