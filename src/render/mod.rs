pub mod day;
pub mod month;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Columns per day cell.
    pub cell_width: usize,
    pub color: bool,
}

impl From<&Config> for RenderOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            cell_width: cfg.cell_width.max(4),
            color: cfg.color_output,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::from(&Config::default())
    }
}
