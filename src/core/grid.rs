//! Month grid generation: the contiguous window of days a month view shows,
//! padded to whole weeks.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{first_of_month, last_of_month, same_month};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Position of `d` inside a week that starts on `self` (0..=6).
    pub fn offset_of(&self, d: NaiveDate) -> u64 {
        match self {
            WeekStart::Monday => d.weekday().num_days_from_monday() as u64,
            WeekStart::Sunday => d.weekday().num_days_from_sunday() as u64,
        }
    }
}

impl FromStr for WeekStart {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" | "lunes" => Ok(WeekStart::Monday),
            "sunday" | "sun" | "domingo" => Ok(WeekStart::Sunday),
            other => Err(AppError::InvalidWeekStart(other.to_string())),
        }
    }
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
}

/// Ordered, contiguous, non-empty run of days `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarWindow {
    days: Vec<GridDay>,
    month: NaiveDate,
}

impl CalendarWindow {
    /// Window over an arbitrary inclusive range. `month` is any date in the
    /// month considered "current" for the `in_current_month` flags.
    pub fn from_range(start: NaiveDate, end: NaiveDate, month: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidWindow(format!(
                "start {} is after end {}",
                start, end
            )));
        }

        let len = (end - start).num_days() as usize + 1;
        let days: Vec<GridDay> = start
            .iter_days()
            .take(len)
            .map(|date| GridDay {
                date,
                in_current_month: same_month(date, month),
            })
            .collect();

        // iter_days stops at NaiveDate::MAX
        if days.len() != len {
            return Err(AppError::InvalidWindow(format!(
                "range {}..={} exceeds the supported calendar",
                start, end
            )));
        }

        let month = first_of_month(month)
            .ok_or_else(|| AppError::InvalidWindow(format!("invalid month {}", month)))?;

        Ok(Self { days, month })
    }

    pub fn start(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn end(&self) -> NaiveDate {
        self.days[self.days.len() - 1].date
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false: construction rejects empty ranges.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn days(&self) -> &[GridDay] {
        &self.days
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start() && d <= self.end()
    }

    /// Ordinal index of `d` relative to the window start.
    pub fn offset_of(&self, d: NaiveDate) -> Option<usize> {
        if !self.contains(d) {
            return None;
        }
        Some((d - self.start()).num_days() as usize)
    }

    pub fn day_at(&self, offset: usize) -> Option<&GridDay> {
        self.days.get(offset)
    }

    pub fn in_current_month(&self, d: NaiveDate) -> bool {
        same_month(d, self.month)
    }

    /// Rows of seven days. Only meaningful for windows built by
    /// [`month_window`], which always start on a week boundary.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridDay]> {
        self.days.chunks(7)
    }
}

/// The month view for `reference`: every day of its month, plus leading days
/// back to `week_start` and trailing days up to the end of the last week.
pub fn month_window(reference: NaiveDate, week_start: WeekStart) -> AppResult<CalendarWindow> {
    let first = first_of_month(reference)
        .ok_or_else(|| AppError::InvalidMonth(reference.to_string()))?;
    let last =
        last_of_month(reference).ok_or_else(|| AppError::InvalidMonth(reference.to_string()))?;

    let leading = week_start.offset_of(first);
    let trailing = 6 - week_start.offset_of(last);

    let start = first
        .checked_sub_days(Days::new(leading))
        .ok_or_else(|| AppError::InvalidWindow(format!("cannot pad month of {}", reference)))?;
    let end = last
        .checked_add_days(Days::new(trailing))
        .ok_or_else(|| AppError::InvalidWindow(format!("cannot pad month of {}", reference)))?;

    CalendarWindow::from_range(start, end, first)
}
