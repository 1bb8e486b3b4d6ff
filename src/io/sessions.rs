//! Session source: decodes the JSON payload delivered by the sessions API
//! (or saved from it) into [`Session`] records.
//!
//! Records that do not decode, or whose dates are missing or unparsable, are
//! dropped with a diagnostic; the rest of the payload still loads.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::diagnostic::{Diagnostic, DiagnosticKind};
use crate::models::session::{Session, SessionId};
use crate::models::status::SessionStatus;
use crate::utils::date::parse_date_lenient;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Wire shape of one session, camelCase as the backend sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSession {
    id: Option<SessionId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    type_label: Option<String>,
    #[serde(default)]
    status: Option<SessionStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<Value>),
    Wrapped { sessions: Vec<Value> },
}

/// Values used for missing display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub color: String,
    pub type_label: String,
}

impl From<&Config> for SessionDefaults {
    fn from(cfg: &Config) -> Self {
        Self {
            color: cfg.default_color.clone(),
            type_label: cfg.default_type_label.clone(),
        }
    }
}

impl Default for SessionDefaults {
    fn default() -> Self {
        SessionDefaults::from(&Config::default())
    }
}

#[derive(Debug, Default)]
pub struct LoadedSessions {
    /// Input order preserved: the layout tie-break depends on it.
    pub sessions: Vec<Session>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn load_sessions(path: &Path, defaults: &SessionDefaults) -> AppResult<LoadedSessions> {
    let content = fs::read_to_string(path)?;
    parse_sessions(&content, defaults)
}

pub fn parse_sessions(json: &str, defaults: &SessionDefaults) -> AppResult<LoadedSessions> {
    let raw = match serde_json::from_str::<Payload>(json)? {
        Payload::List(v) => v,
        Payload::Wrapped { sessions } => sessions,
    };

    let mut out = LoadedSessions::default();

    for (idx, value) in raw.into_iter().enumerate() {
        let r = match RawSession::deserialize(&value) {
            Ok(r) => r,
            Err(e) => {
                out.diagnostics.push(Diagnostic::new(
                    raw_id(&value),
                    DiagnosticKind::InvalidRecord,
                    format!("record #{idx} does not decode ({e})"),
                ));
                continue;
            }
        };

        // no id: fall back to the payload position, prefixed so it never
        // matches a real numeric id
        let id = r.id.unwrap_or_else(|| SessionId::Text(format!("#{idx}")));

        let start = r.start_date.as_deref().and_then(parse_date_lenient);
        let end = r.end_date.as_deref().and_then(parse_date_lenient);

        let (Some(start_date), Some(end_date)) = (start, end) else {
            out.diagnostics.push(Diagnostic::new(
                Some(id),
                DiagnosticKind::InvalidDate,
                format!(
                    "unreadable dates (startDate={:?}, endDate={:?})",
                    r.start_date.unwrap_or_default(),
                    r.end_date.unwrap_or_default()
                ),
            ));
            continue;
        };

        out.sessions.push(Session {
            id,
            title: r.title.unwrap_or_default(),
            start_date,
            end_date,
            color: non_blank(r.color).unwrap_or_else(|| defaults.color.clone()),
            type_label: non_blank(r.type_label).unwrap_or_else(|| defaults.type_label.clone()),
            status: r.status,
        });
    }

    Ok(out)
}

/// Best-effort id of a record that failed to decode.
fn raw_id(value: &Value) -> Option<SessionId> {
    match value.get("id")? {
        Value::String(s) => Some(SessionId::Text(s.clone())),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => SessionId::Num(i),
            None => SessionId::Text(n.to_string()),
        }),
        _ => None,
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
