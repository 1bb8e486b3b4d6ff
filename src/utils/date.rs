//! Date utilities: parsing of the backend's date strings, month parsing,
//! calendar-month comparisons.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accepts `YYYY-MM-DD` or an ISO-8601 datetime (`2025-06-05T09:00:00Z`,
/// `2025-06-05 09:00`); the time part is ignored.
pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Some(d) = parse_date(s) {
        return Some(d);
    }

    let head = s.get(..10)?;
    let sep = s[10..].chars().next()?;
    if sep != 'T' && sep != ' ' {
        return None;
    }
    parse_date(head)
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}

/// Resolve an optional `--month` argument, defaulting to the current month.
pub fn resolve_month(month: &Option<String>) -> AppResult<NaiveDate> {
    match month {
        Some(m) => parse_month(m),
        None => {
            let t = today();
            NaiveDate::from_ymd_opt(t.year(), t.month(), 1)
                .ok_or_else(|| AppError::InvalidMonth(t.to_string()))
        }
    }
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn first_of_month(d: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1)
}

pub fn last_of_month(d: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

pub fn month_label(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}
