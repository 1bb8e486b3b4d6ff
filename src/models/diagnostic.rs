use super::session::SessionId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The record is not a session object (wrong field types).
    InvalidRecord,
    /// A date field was missing or could not be parsed.
    InvalidDate,
    /// `startDate > endDate`.
    InvertedRange,
    /// Valid range that does not touch the visible window.
    OutsideWindow,
}

/// A session left out of a layout pass, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub session_id: Option<SessionId>,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(session_id: Option<SessionId>, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            session_id,
            kind,
            message: message.into(),
        }
    }

    /// Out-of-window sessions are expected on every month change.
    pub fn is_anomaly(&self) -> bool {
        !matches!(self.kind, DiagnosticKind::OutsideWindow)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.session_id {
            Some(id) => write!(f, "session {id}: {}", self.message),
            None => write!(f, "session <no id>: {}", self.message),
        }
    }
}
