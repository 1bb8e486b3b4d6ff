use super::session::{Session, SessionId};
use chrono::NaiveDate;

/// Layout-side view of a session: identity and raw date range only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: SessionId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// `end - start + 1`; zero or negative for an inverted range.
    pub duration_days: i64,
}

impl Event {
    pub fn new(id: impl Into<SessionId>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            duration_days: (end - start).num_days() + 1,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl From<&Session> for Event {
    fn from(s: &Session) -> Self {
        Event::new(s.id.clone(), s.start_date, s.end_date)
    }
}
