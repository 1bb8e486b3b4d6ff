/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Map a session color token to an ANSI foreground.
///
/// Accepts color names (English or Spanish) and `#rrggbb` hex values, the
/// latter rendered as 24-bit color. Unknown tokens fall back to WHITE.
pub fn ansi_for_token(token: &str) -> String {
    let t = token.trim().to_lowercase();

    if let Some(hex) = t.strip_prefix('#')
        && let Some((r, g, b)) = parse_hex(hex)
    {
        return format!("\x1b[38;2;{r};{g};{b}m");
    }

    let named = match t.as_str() {
        "red" | "rojo" | "danger" | "error" => RED,
        "green" | "verde" | "success" => GREEN,
        "yellow" | "amarillo" | "warning" | "orange" | "naranja" => YELLOW,
        "blue" | "azul" | "primary" | "info" => BLUE,
        "cyan" | "teal" => CYAN,
        "magenta" | "purple" | "morado" | "pink" | "rosa" => MAGENTA,
        "grey" | "gray" | "gris" | "secondary" => GREY,
        _ => WHITE,
    };
    named.to_string()
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        // #rgb
        3 => {
            let mut it = hex.chars().map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
            Some((it.next()??, it.next()??, it.next()??))
        }
        _ => None,
    }
}

/// Wrap `value` in `color` + RESET, or return it untouched when colors are off.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
