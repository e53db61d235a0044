// numstat/src/lib.rs
//! # numstat CLI/TUI Application
//!
//! Terminal front ends for `numstat-core`: the one-shot `calc` command and
//! the interactive editor behind `tui`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod tui;
pub mod ui;
pub mod utils;

// Re-export core TUI runner
pub use tui::run_tui;
