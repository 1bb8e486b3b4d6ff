mod common;
use common::d;
use rcalendar::core::grid::{WeekStart, month_window};
use rcalendar::core::logic::Core;
use rcalendar::export::PlacementExport;
use rcalendar::models::session::Session;
use rcalendar::models::status::SessionStatus;
use rcalendar::render::RenderOptions;
use rcalendar::render::day::render_day;
use rcalendar::render::month::render_month;
use rcalendar::utils::formatting::{pad_right, truncate};

fn plain() -> RenderOptions {
    RenderOptions {
        cell_width: 12,
        color: false,
    }
}

#[test]
fn test_month_view_draws_bars_across_cells() {
    let window = month_window(d(2025, 6, 1), WeekStart::Monday).unwrap();
    let sessions = vec![
        Session::new("k", "Kickoff", d(2025, 6, 2), d(2025, 6, 4)),
        Session::new("m", "Demo", d(2025, 6, 4), d(2025, 6, 4)),
    ];
    let report = Core::build_layout(&sessions, &window);
    let out = render_month(&report, &window, &plain());

    assert!(out.contains("=== June 2025 ==="));
    // Mon..Wed merged: 3 cells + 2 separators = 38 columns
    assert!(out.contains(&format!("[Kickoff {}]", "=".repeat(28))));
    assert!(out.contains("[Demo =====]"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_month_view_continues_bar_on_next_week() {
    // Sat Jun 7 → Tue Jun 10 crosses the Monday week boundary
    let window = month_window(d(2025, 6, 1), WeekStart::Monday).unwrap();
    let sessions = vec![Session::new("s", "Sprint", d(2025, 6, 7), d(2025, 6, 10))];
    let report = Core::build_layout(&sessions, &window);
    let out = render_month(&report, &window, &plain());

    // Sat+Sun: opens, stays open on the right
    let opening = format!("[Sprint {}", "=".repeat(17));
    assert!(out.lines().any(|l| l.ends_with(&opening)));
    // Mon+Tue: continuation, closed on the right
    let closing = format!("=Sprint {}]", "=".repeat(16));
    assert!(out.lines().any(|l| l.starts_with(&closing)));
}

#[test]
fn test_month_view_colors_when_enabled() {
    let window = month_window(d(2025, 6, 1), WeekStart::Monday).unwrap();
    let sessions = vec![Session::new("k", "Kickoff", d(2025, 6, 2), d(2025, 6, 2)).with_color("red")];
    let report = Core::build_layout(&sessions, &window);
    let opts = RenderOptions {
        cell_width: 12,
        color: true,
    };
    let out = render_month(&report, &window, &opts);

    assert!(out.contains("\x1b[31m[Kickoff"));
}

#[test]
fn test_day_table_lists_rows_and_segments() {
    let window = month_window(d(2025, 6, 1), WeekStart::Monday).unwrap();
    let sessions = vec![
        Session::new("k", "Kickoff", d(2025, 6, 2), d(2025, 6, 4)),
        Session::new("m", "Demo", d(2025, 6, 4), d(2025, 6, 4)).with_status(SessionStatus::Completada),
    ];
    let report = Core::build_layout(&sessions, &window);
    let out = render_day(report.day(d(2025, 6, 4)).unwrap());

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with("0    end"));
    assert!(lines[3].starts_with("1    single   1"));
    assert!(lines[3].contains("Completada"));
}

#[test]
fn test_truncate_uses_display_width() {
    assert_eq!(truncate("Onboarding", 20), "Onboarding");
    assert_eq!(truncate("Onboarding", 5), "Onbo…");
    // wide chars take two columns
    assert_eq!(truncate("会議会議", 5), "会議…");
    assert_eq!(pad_right("ab", 4), "ab  ");
}

#[test]
fn test_placement_export_serializes_flat() {
    let row = PlacementExport {
        date: "2025-06-02".into(),
        in_current_month: true,
        event_id: "1".into(),
        title: "Kickoff".into(),
        row: 0,
        segment: "start".into(),
        span: Some(3),
        color: "blue".into(),
        type_label: "Sesión".into(),
        status: "programada".into(),
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["span"], 3);
    assert_eq!(json["segment"], "start");
}
