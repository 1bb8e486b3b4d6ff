//! Memoization of the last layout pass.

use crate::core::grid::CalendarWindow;
use crate::core::logic::Core;
use crate::models::layout::LayoutReport;
use crate::models::session::Session;
use chrono::NaiveDate;

/// Full copy of the inputs: a hit requires equal sessions, not equal hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    sessions: Vec<Session>,
    start: NaiveDate,
    end: NaiveDate,
    month: NaiveDate,
}

impl CacheKey {
    fn matches(&self, sessions: &[Session], window: &CalendarWindow) -> bool {
        self.start == window.start()
            && self.end == window.end()
            && self.month == window.month()
            && self.sessions == sessions
    }

    fn of(sessions: &[Session], window: &CalendarWindow) -> Self {
        Self {
            sessions: sessions.to_vec(),
            start: window.start(),
            end: window.end(),
            month: window.month(),
        }
    }
}

/// Keeps the report of the last `(sessions, window)` pair.
/// Any change in either recomputes from scratch.
#[derive(Debug, Default)]
pub struct LayoutCache {
    last: Option<(CacheKey, LayoutReport)>,
    hits: usize,
    misses: usize,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&mut self, sessions: &[Session], window: &CalendarWindow) -> &LayoutReport {
        if matches!(&self.last, Some((k, _)) if k.matches(sessions, window)) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.last = None;
        }

        let (_, report) = self.last.get_or_insert_with(|| {
            (
                CacheKey::of(sessions, window),
                Core::build_layout(sessions, window),
            )
        });
        report
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
