//! Configuration management for `numstat-core`.
//!
//! Settings are read from YAML. Every field is optional so a user file can
//! override a single key; [`merge_config`] layers such a file over the
//! embedded defaults and the accessor methods on [`StatsConfig`] fall back to
//! built-in constants for anything still unset.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::StatsError;
use crate::format::{DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::parser::ParseMode;

/// Default pause before an interactive calculation runs.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Default lifetime of a status alert in the interactive UI.
pub const DEFAULT_ALERT_TIMEOUT_MS: u64 = 5000;

/// Settings for the tokenizer and number parser.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct ParserConfig {
    pub mode: Option<ParseMode>,
}

/// Settings for how statistics are rendered.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct OutputConfig {
    /// Digits after the decimal point (default: 6).
    pub decimals: Option<usize>,
}

/// Settings used only by the interactive front end.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct InteractiveConfig {
    /// Artificial pause between the trigger and the calculation.
    pub delay_ms: Option<u64>,
    /// How long a status alert stays on screen.
    pub alert_timeout_ms: Option<u64>,
}

/// Represents the top-level configuration structure for numstat.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct StatsConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
    pub interactive: InteractiveConfig,
}

impl StatsConfig {
    /// Loads settings from a YAML file. Missing keys stay unset.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading settings from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(StatsError::from)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the settings embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default settings from embedded string...");
        let default_yaml = include_str!("../config/default_settings.yaml");
        Self::from_yaml(default_yaml).context("Failed to parse default settings")
    }

    fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(text)?)
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.parser.mode.unwrap_or_default()
    }

    pub fn decimals(&self) -> usize {
        self.output.decimals.unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.interactive.delay_ms.unwrap_or(DEFAULT_DELAY_MS))
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_millis(
            self.interactive
                .alert_timeout_ms
                .unwrap_or(DEFAULT_ALERT_TIMEOUT_MS),
        )
    }

    /// Checks that every value set is within range.
    pub fn validate(&self) -> Result<(), StatsError> {
        let mut errors = Vec::new();

        if let Some(decimals) = self.output.decimals {
            if decimals > MAX_DECIMALS {
                errors.push(format!(
                    "output.decimals ({}) exceeds maximum allowed ({}).",
                    decimals, MAX_DECIMALS
                ));
            }
        }

        if self.interactive.alert_timeout_ms == Some(0) {
            errors.push("interactive.alert_timeout_ms must be greater than zero.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(StatsError::Config(errors.join(" ")))
        }
    }
}

/// Layers user settings over the defaults; keys set by the user win.
pub fn merge_config(default_config: StatsConfig, user_config: Option<StatsConfig>) -> StatsConfig {
    let Some(user) = user_config else {
        return default_config;
    };

    let merged = StatsConfig {
        parser: ParserConfig {
            mode: user.parser.mode.or(default_config.parser.mode),
        },
        output: OutputConfig {
            decimals: user.output.decimals.or(default_config.output.decimals),
        },
        interactive: InteractiveConfig {
            delay_ms: user.interactive.delay_ms.or(default_config.interactive.delay_ms),
            alert_timeout_ms: user
                .interactive
                .alert_timeout_ms
                .or(default_config.interactive.alert_timeout_ms),
        },
    };
    debug!("Merged settings: {:?}", merged);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = StatsConfig::load_default().unwrap();
        assert_eq!(config.parse_mode(), ParseMode::Prefix);
        assert_eq!(config.decimals(), DEFAULT_DECIMALS);
        assert_eq!(config.delay(), Duration::from_millis(DEFAULT_DELAY_MS));
        assert_eq!(config.alert_timeout(), Duration::from_millis(DEFAULT_ALERT_TIMEOUT_MS));
    }

    #[test]
    fn unset_config_falls_back() {
        let config = StatsConfig::default();
        assert_eq!(config.decimals(), 6);
        assert_eq!(config.parse_mode(), ParseMode::Prefix);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let mut config = StatsConfig::default();
        config.output.decimals = Some(MAX_DECIMALS + 1);
        config.interactive.alert_timeout_ms = Some(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, StatsError::Config(_)));
        let message = err.to_string();
        assert!(message.starts_with("Invalid configuration:"));
        assert!(message.contains("output.decimals"));
        assert!(message.contains("alert_timeout_ms"));
    }
}
