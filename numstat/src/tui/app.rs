// numstat/src/tui/app.rs
//! Application state for the numstat TUI.
//!
//! Holds the input buffer, the last successful results, the transient alert
//! and the loading flag that keeps a second calculation from starting while
//! one is in flight.

use numstat_core::parser::is_blank;
use numstat_core::{Calculation, StatsError};
use std::time::{Duration, Instant};

use crate::ui::alert::Alert;

/// An alert together with the moment it was raised.
#[derive(Debug, Clone)]
pub struct ActiveAlert {
    pub alert: Alert,
    pub shown_at: Instant,
}

pub struct App {
    pub input: String,
    pub results: Option<Calculation>,
    pub alert: Option<ActiveAlert>,
    /// A calculation is in flight; the trigger is disabled.
    pub loading: bool,
    pub should_quit: bool,
    pub alert_timeout: Duration,
}

impl App {
    pub fn new(alert_timeout: Duration) -> Self {
        Self {
            input: String::new(),
            results: None,
            alert: None,
            loading: false,
            should_quit: false,
            alert_timeout,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn insert_str(&mut self, text: &str) {
        // Terminals deliver pasted line breaks as \r or \r\n.
        self.input.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
    }

    pub fn insert_newline(&mut self) {
        self.input.push('\n');
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Handles the calculate trigger.
    ///
    /// Returns the text to calculate when a pass should start. A trigger
    /// while loading is ignored; blank input raises the empty-input alert
    /// without starting a pass.
    pub fn begin_calculation(&mut self, now: Instant) -> Option<String> {
        if self.loading {
            return None;
        }

        let text = self.input.trim_matches(is_blank);
        if text.is_empty() {
            self.show_alert(Alert::from_error(&StatsError::EmptyInput), now);
            return None;
        }

        self.loading = true;
        Some(text.to_string())
    }

    /// Applies the outcome of a pass and re-enables the trigger.
    ///
    /// Previous results stay on screen when the pass failed.
    pub fn finish_calculation(&mut self, outcome: Result<Calculation, StatsError>, now: Instant) {
        self.loading = false;
        self.show_alert(Alert::from_outcome(&outcome), now);
        if let Ok(calc) = outcome {
            self.results = Some(calc);
        }
    }

    pub fn show_alert(&mut self, alert: Alert, now: Instant) {
        self.alert = Some(ActiveAlert { alert, shown_at: now });
    }

    /// Drops the alert once it has been visible for `alert_timeout`.
    pub fn expire_alert(&mut self, now: Instant) {
        let expired = self
            .alert
            .as_ref()
            .is_some_and(|active| now.saturating_duration_since(active.shown_at) >= self.alert_timeout);
        if expired {
            self.alert = None;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::alert::AlertKind;
    use numstat_core::{headless_calculate, StatsConfig};

    fn app() -> App {
        App::new(Duration::from_secs(5))
    }

    #[test]
    fn blank_input_alerts_without_loading() {
        let mut app = app();
        app.insert_str("   \n\t");
        assert_eq!(app.begin_calculation(Instant::now()), None);
        assert!(!app.loading);
        let active = app.alert.as_ref().unwrap();
        assert_eq!(active.alert.kind, AlertKind::Error);
        assert_eq!(active.alert.message, "Please enter data to calculate");
    }

    #[test]
    fn trigger_while_loading_is_ignored() {
        let mut app = app();
        app.insert_str("1 2 3");
        let now = Instant::now();
        assert_eq!(app.begin_calculation(now).as_deref(), Some("1 2 3"));
        assert!(app.loading);
        assert_eq!(app.begin_calculation(now), None);
    }

    #[test]
    fn finishing_always_clears_loading() {
        let mut app = app();
        app.insert_str("abc");
        let now = Instant::now();
        let text = app.begin_calculation(now).unwrap();
        app.finish_calculation(headless_calculate(&text, &StatsConfig::default()), now);
        assert!(!app.loading);
        assert!(app.results.is_none());
        assert_eq!(app.alert.as_ref().unwrap().alert.message, "No valid numeric data found");

        app.loading = true;
        app.finish_calculation(Err(StatsError::Unexpected("boom".into())), now);
        assert!(!app.loading);
    }

    #[test]
    fn failed_pass_keeps_previous_results() {
        let mut app = app();
        let now = Instant::now();
        app.finish_calculation(headless_calculate("1 2", &StatsConfig::default()), now);
        assert!(app.results.is_some());
        app.finish_calculation(Err(StatsError::NoValidData), now);
        assert_eq!(app.results.as_ref().unwrap().record.mean, "1.500000");
    }

    #[test]
    fn alert_expires_after_timeout() {
        let mut app = app();
        let start = Instant::now();
        app.show_alert(Alert::new(AlertKind::Success, "ok"), start);
        app.expire_alert(start + Duration::from_secs(4));
        assert!(app.alert.is_some());
        app.expire_alert(start + Duration::from_secs(5));
        assert!(app.alert.is_none());
    }

    #[test]
    fn pasted_carriage_returns_become_newlines() {
        let mut app = app();
        app.insert_str("1\r\n2\r3");
        assert_eq!(app.input, "1\n2\n3");
        app.backspace();
        assert_eq!(app.input, "1\n2\n");
        app.clear_input();
        assert!(app.input.is_empty());
    }
}
