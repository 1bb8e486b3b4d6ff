//! Intersection of an event's date range with the visible window.

use crate::core::grid::CalendarWindow;
use chrono::NaiveDate;
use serde::Serialize;

/// Inclusive, non-inverted run of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start && d <= self.end
    }

    pub fn len_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.len_days())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    Visible(DateSpan),
    /// Raw range has `start > end`.
    Inverted,
    OutsideWindow,
}

/// Clip `[start, end]` to the window bounds.
/// Inverted raw ranges are reported as such, never as out-of-window.
pub fn clip_range(start: NaiveDate, end: NaiveDate, window: &CalendarWindow) -> Clip {
    if start > end {
        return Clip::Inverted;
    }

    let effective_start = start.max(window.start());
    let effective_end = end.min(window.end());

    match DateSpan::new(effective_start, effective_end) {
        Some(span) => Clip::Visible(span),
        None => Clip::OutsideWindow,
    }
}
