//! Per-day rendering intent for a placed event.

use super::clip::DateSpan;
use crate::models::segment::Segment;
use chrono::NaiveDate;

/// Which part of the bar `day` is, judged against the *clipped* span:
/// a bar that starts before the window opens with `Start` on its first
/// visible day. `None` when `day` is outside the span.
pub fn classify_segment(span: &DateSpan, day: NaiveDate) -> Option<Segment> {
    if !span.contains(day) {
        return None;
    }

    let seg = match (day == span.start, day == span.end) {
        (true, true) => Segment::Single,
        (true, false) => Segment::Start,
        (false, true) => Segment::End,
        (false, false) => Segment::Middle,
    };
    Some(seg)
}

/// Number of consecutive days from `day` that stay inside `span` and inside
/// the same rendering lane as `day` according to `same_lane` (normally the
/// "same calendar month" test). Always >= 1 for a day inside the span.
pub fn compute_visible_span_days<F>(span: &DateSpan, day: NaiveDate, same_lane: F) -> Option<u32>
where
    F: Fn(NaiveDate, NaiveDate) -> bool,
{
    if !span.contains(day) {
        return None;
    }

    let following = day
        .iter_days()
        .skip(1)
        .take_while(|d| span.contains(*d) && same_lane(day, *d))
        .count();

    Some(1 + following as u32)
}
