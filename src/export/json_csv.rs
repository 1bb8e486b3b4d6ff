// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{ExportFormat, PlacementExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[PlacementExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to {}: {}", ExportFormat::Json.label(), path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success(ExportFormat::Json, path, rows.len());
    Ok(())
}

/// Export CSV (header row comes from serde field names).
pub(crate) fn export_csv(rows: &[PlacementExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to {}: {}", ExportFormat::Csv.label(), path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success(ExportFormat::Csv, path, rows.len());
    Ok(())
}
