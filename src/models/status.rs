use serde::{Deserialize, Serialize};
use std::fmt;

/// Session status as delivered by the backend.
/// Only the display icon depends on it, never the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    Programada,
    EnCurso,
    Completada,
    Cancelada,
    Other(String),
}

impl SessionStatus {
    pub fn code(&self) -> &str {
        match self {
            SessionStatus::Programada => "programada",
            SessionStatus::EnCurso => "en_curso",
            SessionStatus::Completada => "completada",
            SessionStatus::Cancelada => "cancelada",
            SessionStatus::Other(s) => s.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SessionStatus::Programada => "Programada",
            SessionStatus::EnCurso => "En curso",
            SessionStatus::Completada => "Completada",
            SessionStatus::Cancelada => "Cancelada",
            SessionStatus::Other(s) => s.as_str(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SessionStatus::Programada => "◷",
            SessionStatus::EnCurso => "▶",
            SessionStatus::Completada => "✔",
            SessionStatus::Cancelada => "✖",
            SessionStatus::Other(_) => "•",
        }
    }
}

impl From<String> for SessionStatus {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "programada" => SessionStatus::Programada,
            "en_curso" => SessionStatus::EnCurso,
            "completada" => SessionStatus::Completada,
            "cancelada" => SessionStatus::Cancelada,
            _ => SessionStatus::Other(s),
        }
    }
}

impl From<SessionStatus> for String {
    fn from(s: SessionStatus) -> Self {
        s.code().to_string()
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
