mod common;
use common::{JUNE_SESSIONS, rcal, setup_test_config, temp_path, write_sessions};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_grid_prints_padded_month() {
    let cfg = setup_test_config("grid_month");

    rcal()
        .args(["--config", &cfg, "--no-color", "grid", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("June 2025"))
        .stdout(predicate::str::contains("2025-05-26 → 2025-07-06 (42 days)"));
}

#[test]
fn test_grid_week_start_override() {
    let cfg = setup_test_config("grid_sunday");

    rcal()
        .args([
            "--config",
            &cfg,
            "--no-color",
            "--week-start",
            "sunday",
            "grid",
            "--month",
            "2025-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-01 → 2025-07-05 (35 days)"));
}

#[test]
fn test_grid_rejects_bad_month() {
    let cfg = setup_test_config("grid_bad_month");

    rcal()
        .args(["--config", &cfg, "grid", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month format"));
}

#[test]
fn test_layout_month_view() {
    let cfg = setup_test_config("layout_month");
    let sessions = write_sessions("layout_month", JUNE_SESSIONS);

    rcal()
        .args([
            "--config", &cfg, "--no-color", "layout", "--file", &sessions, "--month", "2025-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== June 2025 ==="))
        .stdout(predicate::str::contains("[◷ Kickoff "))
        .stdout(predicate::str::contains("Lanes: 2"))
        .stdout(predicate::str::contains(
            "Skipped session W: start date after end date (2025-06-10 → 2025-06-05)",
        ))
        .stdout(predicate::str::contains("1 session(s) outside the visible window"));
}

#[test]
fn test_layout_quiet_hides_diagnostics() {
    let cfg = setup_test_config("layout_quiet");
    let sessions = write_sessions("layout_quiet", JUNE_SESSIONS);

    rcal()
        .args([
            "--config", &cfg, "--no-color", "layout", "--file", &sessions, "--month", "2025-06",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped").not());
}

#[test]
fn test_layout_single_day_table() {
    let cfg = setup_test_config("layout_day");
    let sessions = write_sessions("layout_day", JUNE_SESSIONS);

    rcal()
        .args([
            "--config", &cfg, "--no-color", "layout", "--file", &sessions, "--day", "2025-06-04",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== 2025-06-04 ==="))
        .stdout(predicate::str::contains("Kickoff"))
        .stdout(predicate::str::contains("single"))
        .stdout(predicate::str::contains("Completada"));
}

#[test]
fn test_layout_empty_day() {
    let cfg = setup_test_config("layout_empty_day");
    let sessions = write_sessions("layout_empty_day", JUNE_SESSIONS);

    rcal()
        .args([
            "--config", &cfg, "--no-color", "layout", "--file", &sessions, "--day", "2025-06-20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions on 2025-06-20"));
}

#[test]
fn test_layout_requires_sessions_file() {
    let cfg = setup_test_config("layout_no_file");

    rcal()
        .args(["--config", &cfg, "layout", "--month", "2025-06"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No sessions file given"));
}

#[test]
fn test_layout_uses_sessions_file_from_config() {
    let cfg = setup_test_config("layout_cfg_file");
    let sessions = write_sessions("layout_cfg_file", JUNE_SESSIONS);
    fs::write(&cfg, format!("sessions_file: {sessions}\ncolor_output: false\n")).unwrap();

    rcal()
        .args(["--config", &cfg, "layout", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lanes: 2"));
}

#[test]
fn test_export_csv_rows() {
    let cfg = setup_test_config("export_csv");
    let sessions = write_sessions("export_csv", JUNE_SESSIONS);
    let out = temp_path("export_csv_out", "csv");

    rcal()
        .args([
            "--config", &cfg, "--no-color", "export", "--format", "csv", "--out", &out, "--file",
            &sessions, "--month", "2025-06",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,in_current_month,event_id,title,row,segment,span,color,type_label,status")
    );
    assert!(content.contains("2025-05-28,false,3,Bootcamp,1,start,4,#ff8800,Sesión,\n"));
    assert!(content.contains("2025-06-02,true,1,Kickoff,0,start,3,blue,Sesión,programada\n"));
    assert!(content.contains("2025-06-03,true,1,Kickoff,0,middle,,blue,Sesión,programada\n"));
    assert!(content.contains("2025-06-04,true,2,Demo,1,single,1,green,Demo,completada\n"));
    assert!(!content.contains("Broken"));
    assert!(!content.contains("Retro"));
}

#[test]
fn test_export_json_rows() {
    let cfg = setup_test_config("export_json");
    let sessions = write_sessions("export_json", JUNE_SESSIONS);
    let out = temp_path("export_json_out", "json");

    rcal()
        .args([
            "--config", &cfg, "--no-color", "export", "--out", &out, "--file", &sessions,
            "--month", "2025-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&content).expect("valid json");

    // Kickoff 3 days + Demo 1 day + Bootcamp May 28–Jun 3 (7 days)
    assert_eq!(rows.len(), 11);
    assert!(rows.iter().all(|r| r["event_id"] != "W"));
}

#[test]
fn test_export_does_not_overwrite_without_confirmation() {
    let cfg = setup_test_config("export_no_overwrite");
    let sessions = write_sessions("export_no_overwrite", JUNE_SESSIONS);
    let out = temp_path("export_no_overwrite_out", "json");
    fs::write(&out, "keep me").unwrap();

    rcal()
        .args([
            "--config", &cfg, "--no-color", "export", "--out", &out, "--file", &sessions,
            "--month", "2025-06",
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rcal()
        .args([
            "--config", &cfg, "--no-color", "export", "--out", &out, "--file", &sessions,
            "--month", "2025-06", "--force",
        ])
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_init_writes_config_once() {
    let cfg = setup_test_config("init_once");

    rcal()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("week_start: monday"));
    assert!(content.contains("cell_width: 12"));

    rcal()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_check_and_migrate() {
    let cfg = setup_test_config("config_migrate");
    fs::write(&cfg, "week_start: sunday\n").unwrap();

    rcal()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing fields: "))
        .stdout(predicate::str::contains("default_color"));

    rcal()
        .args(["--config", &cfg, "config", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added missing fields"));

    let content = fs::read_to_string(&cfg).unwrap();
    assert!(content.contains("week_start: sunday"));
    assert!(content.contains("cell_width: 12"));

    rcal()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is complete."));
}

#[test]
fn test_config_print_shows_overrides() {
    let cfg = setup_test_config("config_print");

    rcal()
        .args(["--config", &cfg, "--week-start", "sunday", "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("week_start: sunday"));
}

#[test]
fn test_invalid_config_is_reported() {
    let cfg = setup_test_config("config_invalid");
    fs::write(&cfg, "cell_width: 2\n").unwrap();

    rcal()
        .args(["--config", &cfg, "grid", "--month", "2025-06"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cell_width must be at least 4"));
}

#[test]
fn test_no_color_strips_escapes_from_messages() {
    let cfg = setup_test_config("no_color_messages");
    let sessions = write_sessions("no_color_messages", JUNE_SESSIONS);

    rcal()
        .args([
            "--config", &cfg, "--no-color", "layout", "--file", &sessions, "--month", "2025-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped session W"))
        .stdout(predicate::str::contains("\x1b[").not());

    rcal()
        .args(["--config", &cfg, "--no-color", "grid", "--month", "2040-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_color_output_setting_applies_to_messages() {
    let cfg = setup_test_config("color_output_off");
    fs::write(&cfg, "color_output: false\n").unwrap();
    let sessions = write_sessions("color_output_off", JUNE_SESSIONS);

    rcal()
        .args(["--config", &cfg, "layout", "--file", &sessions, "--month", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lanes: 2"))
        .stdout(predicate::str::contains("\x1b[").not());

    let colored = setup_test_config("color_output_on");
    rcal()
        .args(["--config", &colored, "layout", "--file", &sessions, "--month", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn test_layout_survives_malformed_record() {
    let cfg = setup_test_config("layout_bad_record");
    let sessions = write_sessions(
        "layout_bad_record",
        r#"[
          {"id": 1, "title": "Kickoff", "startDate": "2025-06-02", "endDate": "2025-06-04"},
          {"id": 2, "title": "Numeric", "startDate": 20250605, "endDate": "2025-06-06"}
        ]"#,
    );

    rcal()
        .args([
            "--config", &cfg, "--no-color", "layout", "--file", &sessions, "--month", "2025-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Kickoff "))
        .stdout(predicate::str::contains("Lanes: 1"))
        .stdout(predicate::str::contains("Skipped session 2: record #1 does not decode"));
}
