//! Helpers for writing themed status messages.
//!
//! Color is only emitted when the caller says the target supports it, so
//! piped output and test captures stay plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::alert::Alert;
use crate::ui::theme::{theme_color, ThemeEntry, ThemeMap};

/// Applies the foreground color of `entry` to `text` when color is enabled.
pub fn paint(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, supports_color: bool) -> String {
    match theme_color(theme_map, entry) {
        Some(color) if supports_color => text.color(color.to_ansi_color()).to_string(),
        _ => text.to_string(),
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(msg, entry, theme_map, supports_color))
}

pub fn print_warn_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Warn, theme_map, supports_color)
}

/// Writes an alert as `<symbol> <message>` in the color of its kind.
pub fn print_alert<W: Write>(
    writer: &mut W,
    alert: &Alert,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let line = format!("{} {}", alert.kind.symbol(), alert.message);
    print_message(writer, &line, alert.kind.theme_entry(), theme_map, supports_color)
}
