// src/export/logic.rs

use super::fs_utils::ensure_writable;
use super::json_csv::{export_csv, export_json};
use super::model::report_to_rows;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::layout::LayoutReport;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write every (day, event) placement of `report` to `file`.
    pub fn export(
        report: &LayoutReport,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if path.is_dir() {
            return Err(AppError::Export(format!("{} is a directory", path.display())));
        }

        ensure_writable(path, force)?;

        let rows = report_to_rows(report);
        if rows.is_empty() {
            warning("No placements in the selected month: writing an empty export.");
        }

        match format {
            ExportFormat::Json => export_json(&rows, path),
            ExportFormat::Csv => export_csv(&rows, path),
        }
    }
}
