pub mod config;
pub mod export;
pub mod grid;
pub mod init;
pub mod layout;

use crate::config::Config;
use crate::core::grid::{CalendarWindow, month_window};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::io::sessions::{SessionDefaults, load_sessions};
use crate::models::layout::LayoutReport;
use crate::utils::date::resolve_month;
use crate::utils::path::resolve_sessions_file;

/// Load sessions, build the month window and run the layout pass.
/// Loader diagnostics come first in the report, then layout ones.
pub(crate) fn prepare_layout(
    file: &Option<String>,
    month: &Option<String>,
    cfg: &Config,
) -> AppResult<(CalendarWindow, LayoutReport)> {
    let path = resolve_sessions_file(file, cfg)?;
    let loaded = load_sessions(&path, &SessionDefaults::from(cfg))?;

    let reference = resolve_month(month)?;
    let window = month_window(reference, cfg.week_start)?;

    let mut report = Core::build_layout(&loaded.sessions, &window);
    let mut diagnostics = loaded.diagnostics;
    diagnostics.append(&mut report.diagnostics);
    report.diagnostics = diagnostics;

    Ok((window, report))
}
