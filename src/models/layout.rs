use super::diagnostic::Diagnostic;
use super::segment::Segment;
use super::session::SessionId;
use super::status::SessionStatus;
use crate::core::grid::GridDay;
use chrono::NaiveDate;
use serde::Serialize;

/// What the renderer needs to draw one event in one day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlacement {
    pub event_id: SessionId,
    pub title: String,
    pub color: String,
    pub type_label: String,
    pub status: Option<SessionStatus>,
    pub row: usize,
    pub segment: Segment,
    /// Visible width in days; only set on `start` / `single`.
    pub span: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLayout {
    pub day: GridDay,
    /// Ordered by row.
    pub placements: Vec<DayPlacement>,
}

impl DayLayout {
    pub fn at_row(&self, row: usize) -> Option<&DayPlacement> {
        self.placements.iter().find(|p| p.row == row)
    }
}

/// Output of one layout pass over a window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub days: Vec<DayLayout>,
    pub max_row: Option<usize>,
    pub lane_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl LayoutReport {
    pub fn day(&self, date: NaiveDate) -> Option<&DayLayout> {
        self.days.iter().find(|d| d.day.date == date)
    }

    /// Every `(day, placement)` pair, day by day, row by row.
    pub fn placements(&self) -> impl Iterator<Item = (NaiveDate, &DayPlacement)> {
        self.days
            .iter()
            .flat_map(|d| d.placements.iter().map(move |p| (d.day.date, p)))
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.placements.is_empty())
    }
}
