//! ANSI color helpers for console output
//!
//! Converts ratatui colors to ANSI escape codes and builds the clap styles.
//! File output never goes through these helpers.

use std::ffi::OsStr;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use ratatui::style::Color;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Wrap `text` in the escape codes for `color`, or return it unchanged.
pub fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) if !color_to_ansi(color).is_empty() => {
            format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
        }
        _ => text.to_string(),
    }
}

/// Whether console output should be colored.
///
/// Color must be requested, and `NO_COLOR` must not hold a non-empty value.
pub fn console_colors(requested: bool) -> bool {
    colors_allowed(requested, std::env::var_os("NO_COLOR").as_deref())
}

fn colors_allowed(requested: bool, no_color: Option<&OsStr>) -> bool {
    requested && no_color.map_or(true, |value| value.is_empty())
}

/// Build clap styles matching the theme accent.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}
