//! Logger setup for the numstat binary and its tests.
//!
//! Records are formatted as `[LEVEL target] message`. The one-shot commands
//! log to stderr; the TUI owns the terminal, so it logs to a file instead.
//! `RUST_LOG` is honoured unless a level override is passed in.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

static LOGGER: OnceCell<()> = OnceCell::new();

const LOG_DIR_NAME: &str = "numstat";
const LOG_FILE_NAME: &str = "numstat.log";

fn builder(level_override: Option<LevelFilter>) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    builder
}

/// Initializes the global logger on stderr. Later calls are no-ops, so tests
/// can call this freely.
pub fn init_logger(level_override: Option<LevelFilter>) {
    LOGGER.get_or_init(|| {
        let mut builder = builder(level_override);
        builder.target(Target::Stderr);
        // Another logger (e.g. test-log) may already be installed.
        let _ = builder.try_init();
    });
}

/// `<cache dir>/numstat/numstat.log`, e.g. `~/.cache/numstat/numstat.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Initializes the global logger, appending to `path`.
pub fn init_file_logger(level_override: Option<LevelFilter>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    LOGGER.get_or_init(|| {
        let mut builder = builder(level_override);
        builder.target(Target::Pipe(Box::new(file)));
        let _ = builder.try_init();
    });
    Ok(())
}

/// Picks the level override implied by the global flags.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug && !disable_debug {
        Some(LevelFilter::Debug)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else {
        None
    }
}
