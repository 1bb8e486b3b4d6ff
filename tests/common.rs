#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcal() -> Command {
    cargo_bin_cmd!("rcalendar")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcalendar.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist yet: the CLI falls back to defaults.
pub fn setup_test_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

/// Write a sessions JSON payload and return its path.
pub fn write_sessions(name: &str, json: &str) -> String {
    let p = temp_path(&format!("{name}_sessions"), "json");
    fs::write(&p, json).expect("write sessions file");
    p
}

/// A small June 2025 dataset:
/// - 1 Kickoff     Jun 2–4  (row 0)
/// - 2 Demo        Jun 4    (row 1, overlaps Kickoff)
/// - 3 Bootcamp    May 28–Jun 3 (row 1 in the month grid)
/// - W Broken      Jun 10 → Jun 5 (inverted, skipped)
/// - 5 Retro       Aug 1–2 (outside the June grid)
pub const JUNE_SESSIONS: &str = r##"[
  {"id": 1, "title": "Kickoff", "startDate": "2025-06-02", "endDate": "2025-06-04", "status": "programada"},
  {"id": 2, "title": "Demo", "startDate": "2025-06-04T10:00:00Z", "endDate": "2025-06-04T12:00:00Z", "color": "green", "typeLabel": "Demo", "status": "completada"},
  {"id": 3, "title": "Bootcamp", "startDate": "2025-05-28", "endDate": "2025-06-03", "color": "#ff8800"},
  {"id": "W", "title": "Broken", "startDate": "2025-06-10", "endDate": "2025-06-05"},
  {"id": 5, "title": "Retro", "startDate": "2025-08-01", "endDate": "2025-08-02", "status": "cancelada"}
]"##;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
}
