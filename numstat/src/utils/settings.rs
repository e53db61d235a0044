//! Resolution of the effective settings for a run.
//!
//! Order of precedence, lowest first: the defaults embedded in
//! `numstat-core`, the user's YAML file, then command-line flags.

use anyhow::{Context, Result};
use log::debug;
use numstat_core::config::{merge_config, StatsConfig};
use numstat_core::ParseMode;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "numstat";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// `<config dir>/numstat/config.yaml`, e.g. `~/.config/numstat/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads defaults and layers the user file on top.
///
/// An explicit path must exist. Without one, the default location is used
/// only if a file is present there.
pub fn load_settings(explicit: Option<&Path>) -> Result<StatsConfig> {
    let defaults = StatsConfig::load_default()?;

    let user_path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|path| path.is_file()),
    };

    let user = match user_path {
        Some(path) => {
            debug!("Using settings file {}", path.display());
            Some(StatsConfig::load_from_file(&path)?)
        }
        None => None,
    };

    Ok(merge_config(defaults, user))
}

/// Settings given directly on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub strict: bool,
    pub decimals: Option<usize>,
    pub delay_ms: Option<u64>,
}

impl Overrides {
    /// Applies the flags to `config` and re-validates the result.
    pub fn apply(&self, mut config: StatsConfig) -> Result<StatsConfig> {
        if self.strict {
            config.parser.mode = Some(ParseMode::Strict);
        }
        if let Some(decimals) = self.decimals {
            config.output.decimals = Some(decimals);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.interactive.delay_ms = Some(delay_ms);
        }
        config.validate().context("Invalid command-line settings")?;
        Ok(config)
    }
}
