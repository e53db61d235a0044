//! Status notifications shown after a calculation.
//!
//! Every calculation outcome maps to exactly one alert: an error, an
//! informational notice when some tokens were discarded, or a success.

use numstat_core::{Calculation, StatsError};
use serde::Serialize;

use crate::ui::theme::ThemeEntry;

/// The three categories of status notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Error,
    Info,
    Success,
}

impl AlertKind {
    pub fn theme_entry(self) -> ThemeEntry {
        match self {
            AlertKind::Error => ThemeEntry::Error,
            AlertKind::Info => ThemeEntry::Info,
            AlertKind::Success => ThemeEntry::Success,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AlertKind::Error => "✖",
            AlertKind::Info => "ℹ",
            AlertKind::Success => "✔",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Maps a calculation outcome to the alert the user sees.
    pub fn from_outcome(outcome: &Result<Calculation, StatsError>) -> Self {
        match outcome {
            Ok(calc) if calc.is_partial() => Alert::new(
                AlertKind::Info,
                format!(
                    "Calculation completed. Discarded {} non-numeric value(s)",
                    calc.invalid_count
                ),
            ),
            Ok(_) => Alert::new(AlertKind::Success, "Calculation completed successfully"),
            Err(err) => Self::from_error(err),
        }
    }

    pub fn from_error(err: &StatsError) -> Self {
        match err {
            StatsError::EmptyInput => Alert::new(AlertKind::Error, "Please enter data to calculate"),
            StatsError::NoValidData => Alert::new(AlertKind::Error, "No valid numeric data found"),
            other => Alert::new(
                AlertKind::Error,
                format!("Error processing data: {}", other),
            ),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == AlertKind::Error
    }
}
