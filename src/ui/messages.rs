//! Terminal messages with icon + color prefixes.
//! Everything user-facing that is not layout output goes through here.

use crate::models::diagnostic::Diagnostic;
use crate::utils::colors::{BLUE, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

const BOLD: &str = "\x1b[1m";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Turn ANSI escapes in message prefixes on or off for the whole process.
pub fn set_color_enabled(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

fn code(c: &'static str) -> &'static str {
    if color_enabled() { c } else { "" }
}

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!(
        "{}{}{} {}{}",
        code(BLUE),
        code(BOLD),
        ICON_INFO,
        code(RESET),
        msg
    );
}

pub fn success<T: fmt::Display>(msg: T) {
    println!(
        "{}{}{} {}{}",
        code(GREEN),
        code(BOLD),
        ICON_OK,
        code(RESET),
        msg
    );
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!(
        "{}{}{} {}{}",
        code(YELLOW),
        code(BOLD),
        ICON_WARN,
        code(RESET),
        msg
    );
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!(
        "{}{}{} {}{}",
        code(RED),
        code(BOLD),
        ICON_ERR,
        code(RESET),
        msg
    );
}

/// Secondary line, greyed.
pub fn detail<T: fmt::Display>(msg: T) {
    println!("   {}{}{}", code(GREY), msg, code(RESET));
}

/// Report sessions left out of a layout pass. Out-of-window sessions are
/// routine and only counted.
pub fn diagnostics(diags: &[Diagnostic]) {
    let mut outside = 0;
    for d in diags {
        if d.is_anomaly() {
            warning(format!("Skipped {d}"));
        } else {
            outside += 1;
        }
    }
    if outside > 0 {
        detail(format!("{outside} session(s) outside the visible window"));
    }
}
