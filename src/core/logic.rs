use crate::core::calculator::rows::{SkipReason, compute_row_assignment};
use crate::core::calculator::segment::{classify_segment, compute_visible_span_days};
use crate::core::grid::CalendarWindow;
use crate::models::diagnostic::{Diagnostic, DiagnosticKind};
use crate::models::event::Event;
use crate::models::layout::{DayLayout, DayPlacement, LayoutReport};
use crate::models::session::Session;
use crate::utils::date::same_month;

pub struct Core;

impl Core {
    /// Full layout pass: rows, segments and visible spans for every window day.
    pub fn build_layout(sessions: &[Session], window: &CalendarWindow) -> LayoutReport {
        let events: Vec<Event> = sessions.iter().map(Event::from).collect();
        let assignment = compute_row_assignment(&events, window);

        let diagnostics = assignment
            .skipped()
            .iter()
            .map(|s| {
                let session = &sessions[s.input_index];
                match s.reason {
                    SkipReason::InvertedRange => Diagnostic::new(
                        Some(s.event_id.clone()),
                        DiagnosticKind::InvertedRange,
                        format!("start date after end date ({})", session.date_range_str()),
                    ),
                    SkipReason::OutsideWindow => Diagnostic::new(
                        Some(s.event_id.clone()),
                        DiagnosticKind::OutsideWindow,
                        format!(
                            "{} is outside {} → {}",
                            session.date_range_str(),
                            window.start(),
                            window.end()
                        ),
                    ),
                }
            })
            .collect();

        let days = window
            .days()
            .iter()
            .map(|grid_day| {
                let placements = assignment
                    .on_day(grid_day.date)
                    .into_iter()
                    .filter_map(|p| {
                        let segment = classify_segment(&p.span, grid_day.date)?;
                        let span = if segment.opens_bar() {
                            compute_visible_span_days(&p.span, grid_day.date, same_month)
                        } else {
                            None
                        };
                        let session = &sessions[p.input_index];

                        Some(DayPlacement {
                            event_id: p.event_id.clone(),
                            title: session.title.clone(),
                            color: session.color.clone(),
                            type_label: session.type_label.clone(),
                            status: session.status.clone(),
                            row: p.row,
                            segment,
                            span,
                        })
                    })
                    .collect();

                DayLayout {
                    day: *grid_day,
                    placements,
                }
            })
            .collect();

        LayoutReport {
            days,
            max_row: assignment.max_row(),
            lane_count: assignment.lane_count(),
            diagnostics,
        }
    }
}
