//! Row (lane) assignment for date-ranged events on a calendar window.
//!
//! First fit by input order: each event takes the lowest row that is free on
//! every day of its clipped range, and keeps it for the whole range. This does
//! not minimize the number of rows for arbitrary interval sets; it guarantees
//! no collisions and a reproducible result for a given input order.

use super::clip::{Clip, DateSpan, clip_range};
use crate::core::grid::CalendarWindow;
use crate::models::event::Event;
use crate::models::session::SessionId;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// One event placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPlacement {
    pub event_id: SessionId,
    /// Position of the event in the input slice.
    pub input_index: usize,
    /// Range intersected with the window.
    pub span: DateSpan,
    pub row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    InvertedRange,
    OutsideWindow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEvent {
    pub event_id: SessionId,
    pub input_index: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAssignment {
    placements: Vec<RowPlacement>,
    skipped: Vec<SkippedEvent>,
}

impl RowAssignment {
    /// Placements in input order.
    pub fn placements(&self) -> &[RowPlacement] {
        &self.placements
    }

    pub fn skipped(&self) -> &[SkippedEvent] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Row of `id` on `day`, if the event is visible that day.
    /// With duplicate ids the first placement covering `day` wins.
    pub fn row_for(&self, id: &SessionId, day: NaiveDate) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| &p.event_id == id && p.span.contains(day))
            .map(|p| p.row)
    }

    /// Everything visible on `day`, ordered by row.
    pub fn on_day(&self, day: NaiveDate) -> Vec<&RowPlacement> {
        let mut out: Vec<&RowPlacement> = self
            .placements
            .iter()
            .filter(|p| p.span.contains(day))
            .collect();
        out.sort_by_key(|p| p.row);
        out
    }

    /// Flattened `(eventId, day) -> row` mapping.
    pub fn cells(&self) -> impl Iterator<Item = (&SessionId, NaiveDate, usize)> {
        self.placements
            .iter()
            .flat_map(|p| p.span.days().map(move |d| (&p.event_id, d, p.row)))
    }

    pub fn max_row(&self) -> Option<usize> {
        self.placements.iter().map(|p| p.row).max()
    }

    /// Vertical lanes the renderer has to reserve.
    pub fn lane_count(&self) -> usize {
        self.max_row().map_or(0, |r| r + 1)
    }
}

/// Assign a row to every event visible in `window`.
///
/// Events outside the window or with an inverted range are recorded in
/// [`RowAssignment::skipped`] and get no row.
pub fn compute_row_assignment(events: &[Event], window: &CalendarWindow) -> RowAssignment {
    // used rows per day, indexed by offset from window.start()
    let mut occupied: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); window.len()];
    let mut out = RowAssignment::default();

    for (input_index, ev) in events.iter().enumerate() {
        let span = match clip_range(ev.start, ev.end, window) {
            Clip::Visible(span) => span,
            Clip::Inverted => {
                out.skipped.push(SkippedEvent {
                    event_id: ev.id.clone(),
                    input_index,
                    reason: SkipReason::InvertedRange,
                });
                continue;
            }
            Clip::OutsideWindow => {
                out.skipped.push(SkippedEvent {
                    event_id: ev.id.clone(),
                    input_index,
                    reason: SkipReason::OutsideWindow,
                });
                continue;
            }
        };

        // Both ends are inside the window after clipping.
        let lo = (span.start - window.start()).num_days() as usize;
        let hi = (span.end - window.start()).num_days() as usize;
        let days = &mut occupied[lo..=hi];

        let row = first_free_row(days);
        for used in days.iter_mut() {
            used.insert(row);
        }

        out.placements.push(RowPlacement {
            event_id: ev.id.clone(),
            input_index,
            span,
            row,
        });
    }

    out
}

/// Smallest row not used on any of `days`.
fn first_free_row(days: &[BTreeSet<usize>]) -> usize {
    let mut row = 0;
    while days.iter().any(|used| used.contains(&row)) {
        row += 1;
    }
    row
}
