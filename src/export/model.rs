// src/export/model.rs

use crate::models::layout::LayoutReport;
use serde::Serialize;

/// Flat row: one placement of one event on one day.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PlacementExport {
    pub date: String,
    pub in_current_month: bool,
    pub event_id: String,
    pub title: String,
    pub row: usize,
    pub segment: String,
    /// Empty for `middle` / `end` cells.
    pub span: Option<u32>,
    pub color: String,
    pub type_label: String,
    pub status: String,
}

pub(crate) fn report_to_rows(report: &LayoutReport) -> Vec<PlacementExport> {
    report
        .days
        .iter()
        .flat_map(|d| {
            d.placements.iter().map(move |p| PlacementExport {
                date: d.day.date.format("%Y-%m-%d").to_string(),
                in_current_month: d.day.in_current_month,
                event_id: p.event_id.to_string(),
                title: p.title.clone(),
                row: p.row,
                segment: p.segment.as_str().to_string(),
                span: p.span,
                color: p.color.clone(),
                type_label: p.type_label.clone(),
                status: p
                    .status
                    .as_ref()
                    .map(|s| s.code().to_string())
                    .unwrap_or_default(),
            })
        })
        .collect()
}
