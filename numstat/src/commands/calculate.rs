//! One-shot `calc` command: parse, aggregate, print.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, error, info};
use numstat_core::{headless_calculate, Calculation, StatsConfig, StatsError};
use std::io::{self, Write};

use crate::ui::alert::Alert;
use crate::ui::output_format;
use crate::ui::results::{build_results_table, JsonReport};
use crate::ui::theme::ThemeMap;

/// Options for the ergonomic run_calc_opts API
pub struct CalcOptions {
    pub input: String,
    pub json: bool,
    pub quiet: bool,
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Runs one calculation pass and prints its results and status.
///
/// Results go to stdout, the status alert to stderr. Errors are reported
/// through the returned [`Alert`]; `Err` is reserved for I/O failures while
/// printing.
pub fn run_calc_opts(opts: CalcOptions, config: &StatsConfig, theme_map: &ThemeMap) -> Result<Alert> {
    info!("Starting numstat calculation.");
    debug!("Input length: {} bytes", opts.input.len());

    let outcome = headless_calculate(&opts.input, config);
    let alert = Alert::from_outcome(&outcome);

    match &outcome {
        Ok(calc) => print_results(calc, &alert, opts.json, theme_map)?,
        Err(err) if err.is_input_error() => debug!("Calculation rejected input: {}", err),
        Err(err) => error!("Calculation failed: {}", err),
    }

    print_alert(&alert, opts.quiet, theme_map);

    info!("numstat calculation completed.");
    Ok(alert)
}

fn print_results(calc: &Calculation, alert: &Alert, json: bool, theme_map: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if json {
        let report = JsonReport::new(calc, alert.kind);
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize results")?;
        writeln!(writer, "{}", text)?;
    } else {
        let supports_color = stdout.is_terminal();
        writeln!(writer, "{}", build_results_table(calc, theme_map, supports_color))?;
    }
    Ok(())
}

fn print_alert(alert: &Alert, quiet: bool, theme_map: &ThemeMap) {
    if quiet && !alert.is_error() {
        return;
    }
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_alert(&mut io::stderr(), alert, theme_map, stderr_supports_color);
}

/// Exit status for a finished pass: 0 unless the alert is an error.
pub fn exit_code(alert: &Alert) -> i32 {
    if alert.is_error() { 1 } else { 0 }
}
