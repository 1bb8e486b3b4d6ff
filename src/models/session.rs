use super::status::SessionStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session identifier: the backend sends either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionId {
    Num(i64),
    Text(String),
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionId::Num(n) => write!(f, "{n}"),
            SessionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SessionId {
    fn from(n: i64) -> Self {
        SessionId::Num(n)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        SessionId::Text(s.to_string())
    }
}

/// A session record after loading: dates parsed, optional display fields
/// already filled with defaults. `start_date > end_date` is allowed here;
/// the layout pass leaves such sessions out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    /// Inclusive.
    pub start_date: NaiveDate,
    /// Inclusive.
    pub end_date: NaiveDate,
    /// Color token, resolved by the renderer.
    pub color: String,
    pub type_label: String,
    pub status: Option<SessionStatus>,
}

impl Session {
    /// Builder used by tests and by callers that already hold parsed dates.
    pub fn new(id: impl Into<SessionId>, title: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            start_date: start,
            end_date: end,
            color: "blue".to_string(),
            type_label: String::new(),
            status: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }

    pub fn date_range_str(&self) -> String {
        format!(
            "{} → {}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}
