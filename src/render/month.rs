//! Text month view: one block per week, a line of day numbers followed by
//! one line per lane. A bar is drawn across consecutive cells of its lane:
//!
//! ```text
//!  2          | 3          | 4          | 5          | 6
//! [◷ Onboarding Backend ================]            | [Demo]
//! ```

use super::RenderOptions;
use crate::core::grid::CalendarWindow;
use crate::models::layout::{DayLayout, DayPlacement, LayoutReport};
use crate::utils::colors::{GREY, ansi_for_token, paint};
use crate::utils::date::month_label;
use crate::utils::formatting::{bold, pad_right, pad_right_with};

const SEP: &str = "|";

pub fn render_month(report: &LayoutReport, window: &CalendarWindow, opts: &RenderOptions) -> String {
    let w = opts.cell_width;
    let mut out = String::new();

    let title = format!("=== {} ===", month_label(window.month()));
    out.push_str(&if opts.color { bold(&title) } else { title });
    out.push('\n');

    let weeks: Vec<&[DayLayout]> = report.days.chunks(7).collect();

    // Weekday header from the first week
    if let Some(first) = weeks.first() {
        let names: Vec<String> = first
            .iter()
            .map(|d| pad_right(&d.day.date.format("%a").to_string(), w))
            .collect();
        out.push_str(names.join(SEP).trim_end());
        out.push('\n');
    }

    for week in weeks {
        out.push_str(&"-".repeat(week.len() * (w + 1) - 1));
        out.push('\n');

        let numbers: Vec<String> = week
            .iter()
            .map(|d| {
                let cell = pad_right(&d.day.date.format("%e").to_string(), w);
                if d.day.in_current_month {
                    cell
                } else {
                    paint(&cell, GREY, opts.color)
                }
            })
            .collect();
        out.push_str(numbers.join(SEP).trim_end());
        out.push('\n');

        let lanes = week
            .iter()
            .flat_map(|d| d.placements.iter().map(|p| p.row + 1))
            .max()
            .unwrap_or(0);

        for lane in 0..lanes {
            out.push_str(render_lane(week, lane, opts).trim_end());
            out.push('\n');
        }
    }

    out
}

/// One lane of one week.
fn render_lane(week: &[DayLayout], lane: usize, opts: &RenderOptions) -> String {
    let w = opts.cell_width;
    let mut parts: Vec<String> = Vec::with_capacity(week.len());
    let mut i = 0;

    while i < week.len() {
        let Some(first) = week[i].at_row(lane) else {
            parts.push(" ".repeat(w));
            i += 1;
            continue;
        };

        let run = run_length(week, i, lane, first);
        let last = week[i + run - 1].at_row(lane).unwrap_or(first);
        let width = run * w + (run - 1);

        let bar = draw_bar(first, last, width);
        parts.push(paint(&bar, &ansi_for_token(&first.color), opts.color));
        i += run;
    }

    parts.join(SEP)
}

/// Consecutive cells from `start` held by the same event in `lane`,
/// capped by the visible span of an opening segment.
fn run_length(week: &[DayLayout], start: usize, lane: usize, first: &DayPlacement) -> usize {
    let cap = first.span.map(|s| s as usize).unwrap_or(usize::MAX);
    let mut run = 1;

    while start + run < week.len() && run < cap {
        match week[start + run].at_row(lane) {
            Some(p) if p.event_id == first.event_id && !p.segment.opens_bar() => run += 1,
            _ => break,
        }
    }
    run
}

fn draw_bar(first: &DayPlacement, last: &DayPlacement, width: usize) -> String {
    let left = if first.segment.opens_bar() { '[' } else { '=' };
    let right = if last.segment.closes_bar() { ']' } else { '=' };

    let label = match &first.status {
        Some(s) => format!("{} {} ", s.icon(), first.title),
        None => format!("{} ", first.title),
    };

    let inner = pad_right_with(&label, width.saturating_sub(2), '=');
    format!("{left}{inner}{right}")
}
