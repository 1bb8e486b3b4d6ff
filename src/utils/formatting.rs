//! Formatting utilities used for CLI and export outputs.
//! Widths are display widths (`unicode-width`), not byte or char counts.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` so it fits in `width` columns; a trailing `…` marks the cut.
pub fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad with `fill` up to `width` columns (truncating first).
pub fn pad_right_with(s: &str, width: usize, fill: char) -> String {
    let mut out = truncate(s, width);
    let w = display_width(&out);
    out.extend(std::iter::repeat_n(fill, width.saturating_sub(w)));
    out
}

pub fn pad_right(s: &str, width: usize) -> String {
    pad_right_with(s, width, ' ')
}

/// Left-pad with `fill` up to `width` columns (truncating first).
pub fn pad_left_with(s: &str, width: usize, fill: char) -> String {
    let t = truncate(s, width);
    let w = display_width(&t);
    let mut out: String = std::iter::repeat_n(fill, width.saturating_sub(w)).collect();
    out.push_str(&t);
    out
}

pub fn pad_left(s: &str, width: usize) -> String {
    pad_left_with(s, width, ' ')
}
