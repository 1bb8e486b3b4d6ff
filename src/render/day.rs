//! Per-day placement table (`layout --day`).

use crate::models::layout::DayLayout;
use crate::utils::table::{Column, Table};

pub fn render_day(day: &DayLayout) -> String {
    let mut table = Table::new(vec![
        Column::new("ROW", 4),
        Column::new("SEGMENT", 8),
        Column::new("SPAN", 5),
        Column::new("ID", 8),
        Column::new("TITLE", 28),
        Column::new("TYPE", 14),
        Column::new("STATUS", 14),
    ]);

    for p in &day.placements {
        table.add_row(vec![
            p.row.to_string(),
            p.segment.as_str().to_string(),
            p.span.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
            p.event_id.to_string(),
            p.title.clone(),
            p.type_label.clone(),
            p.status
                .as_ref()
                .map(|s| format!("{} {}", s.icon(), s.label()))
                .unwrap_or_else(|| "-".into()),
        ]);
    }

    table.render()
}
