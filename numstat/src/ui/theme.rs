//! Module for managing the application's output theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of status messages and result tables. It supports
//! 16-color ANSI named colors for foreground styling and provides functionality
//! to load themes from YAML files and manage default theme settings. The same
//! map drives plain terminal output (`owo-colors`), the results table
//! (`comfy-table`) and the interactive UI (`ratatui`).

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use ratatui::style::Color as TuiColor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for headers and panel titles.
    Header,
    /// Style for successful calculation messages.
    Success,
    /// Style for informational messages (e.g. discarded tokens).
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Style for the name of a statistic.
    StatLabel,
    /// Style for the value of a statistic.
    StatValue,
    /// Style for the input prompt and editor.
    Prompt,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 8] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::StatLabel,
        ThemeEntry::StatValue,
        ThemeEntry::Prompt,
    ];
}

/// Represents an ANSI color that can be used in the theme.
///
/// Theme files go through [`FromStr`], so names are case-insensitive and
/// unknown names are rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        match color {
            ThemeColor::Named(name) => name,
        }
    }
}

impl ThemeColor {
    fn name(&self) -> &str {
        match self {
            ThemeColor::Named(name) => name.as_str(),
        }
    }

    /// Converts the color into its `owo_colors::AnsiColors` equivalent.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self.name() {
            "black" => AnsiColors::Black,
            "red" => AnsiColors::Red,
            "green" => AnsiColors::Green,
            "yellow" => AnsiColors::Yellow,
            "blue" => AnsiColors::Blue,
            "magenta" => AnsiColors::Magenta,
            "cyan" => AnsiColors::Cyan,
            "white" => AnsiColors::White,
            "brightblack" => AnsiColors::BrightBlack,
            "brightred" => AnsiColors::BrightRed,
            "brightgreen" => AnsiColors::BrightGreen,
            "brightyellow" => AnsiColors::BrightYellow,
            "brightblue" => AnsiColors::BrightBlue,
            "brightmagenta" => AnsiColors::BrightMagenta,
            "brightcyan" => AnsiColors::BrightCyan,
            "brightwhite" => AnsiColors::BrightWhite,
            _ => AnsiColors::White,
        }
    }

    /// Converts the color into the `ratatui` palette used by the TUI.
    pub fn to_tui_color(&self) -> TuiColor {
        match self.name() {
            "black" => TuiColor::Black,
            "red" => TuiColor::Red,
            "green" => TuiColor::Green,
            "yellow" => TuiColor::Yellow,
            "blue" => TuiColor::Blue,
            "magenta" => TuiColor::Magenta,
            "cyan" => TuiColor::Cyan,
            "white" => TuiColor::Gray,
            "brightblack" => TuiColor::DarkGray,
            "brightred" => TuiColor::LightRed,
            "brightgreen" => TuiColor::LightGreen,
            "brightyellow" => TuiColor::LightYellow,
            "brightblue" => TuiColor::LightBlue,
            "brightmagenta" => TuiColor::LightMagenta,
            "brightcyan" => TuiColor::LightCyan,
            "brightwhite" => TuiColor::White,
            _ => TuiColor::Reset,
        }
    }

    /// Converts the color into the `comfy_table` palette.
    pub fn to_table_color(&self) -> comfy_table::Color {
        use comfy_table::Color;
        match self.name() {
            "black" => Color::Black,
            "red" => Color::DarkRed,
            "green" => Color::DarkGreen,
            "yellow" => Color::DarkYellow,
            "blue" => Color::DarkBlue,
            "magenta" => Color::DarkMagenta,
            "cyan" => Color::DarkCyan,
            "white" => Color::Grey,
            "brightblack" => Color::DarkGrey,
            "brightred" => Color::Red,
            "brightgreen" => Color::Green,
            "brightyellow" => Color::Yellow,
            "brightblue" => Color::Blue,
            "brightmagenta" => Color::Magenta,
            "brightcyan" => Color::Cyan,
            "brightwhite" => Color::White,
            _ => Color::Reset,
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

/// Looks up the foreground color configured for `entry`.
pub fn theme_color(theme_map: &ThemeMap, entry: ThemeEntry) -> Option<&ThemeColor> {
    theme_map.get(&entry).and_then(|style| style.fg.as_ref())
}

impl ThemeStyle {
    /// Loads a theme from a YAML file on disk; entries it omits keep their
    /// default colors.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let mut theme = Self::default_theme_map();
        theme.extend(custom);
        Ok(theme)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let named = |name: &str| ThemeStyle { fg: Some(ThemeColor::Named(name.into())) };

        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, named("brightcyan"));
        default_theme.insert(ThemeEntry::Success, named("green"));
        default_theme.insert(ThemeEntry::Info, named("cyan"));
        default_theme.insert(ThemeEntry::Warn, named("yellow"));
        default_theme.insert(ThemeEntry::Error, named("red"));
        default_theme.insert(ThemeEntry::StatLabel, named("brightblack"));

        for entry in ThemeEntry::ALL {
            default_theme.entry(entry).or_insert_with(|| named("white"));
        }
        default_theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn to_ansi_color_roundtrip() {
        let tc: ThemeColor = "blue".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::Blue);
        let tc: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::BrightMagenta);
    }

    #[test]
    fn tui_color_mapping() {
        let tc: ThemeColor = "brightred".parse().unwrap();
        assert_eq!(tc.to_tui_color(), TuiColor::LightRed);
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(theme_color(&theme, entry).is_some(), "{:?} missing", entry);
        }
    }

    #[test]
    fn custom_theme_overrides_and_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "error:\n  fg: magenta").unwrap();
        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(
            theme_color(&theme, ThemeEntry::Error),
            Some(&ThemeColor::Named("magenta".into()))
        );
        assert_eq!(
            theme_color(&theme, ThemeEntry::Success),
            Some(&ThemeColor::Named("green".into()))
        );
    }

    #[test]
    fn theme_file_names_are_case_insensitive() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "error:\n  fg: Magenta").unwrap();
        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        let color = theme_color(&theme, ThemeEntry::Error).unwrap();
        assert_eq!(color, &ThemeColor::Named("magenta".into()));
        assert_eq!(color.to_ansi_color(), AnsiColors::Magenta);
    }

    #[test]
    fn unknown_color_in_theme_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "success:\n  fg: purple").unwrap();
        let err = ThemeStyle::load_from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid theme color"), "{:#}", err);
    }
}
