// File: numstat-core/src/headless.rs

//! `headless.rs`
//! One-shot calculation pipeline for non-interactive use.
//!
//! Runs parse then aggregate on a raw string and classifies the outcome into
//! the library's error taxonomy. No messages are produced here; front ends
//! turn the result into whatever text they show.

use log::{debug, error};
use serde::Serialize;
use std::any::Any;
use std::panic::{self, UnwindSafe};

use crate::aggregator::{aggregate_with_precision, StatisticsRecord};
use crate::config::StatsConfig;
use crate::errors::StatsError;
use crate::parser::{is_blank, parse_with_mode};

/// A successful calculation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    #[serde(flatten)]
    pub record: StatisticsRecord,
    /// Tokens discarded because they were not numeric.
    pub invalid_count: usize,
}

impl Calculation {
    /// `true` when some tokens were discarded but results were still produced.
    pub fn is_partial(&self) -> bool {
        self.invalid_count > 0
    }
}

/// Parses and aggregates `input` using `config`.
///
/// * Blank input fails with [`StatsError::EmptyInput`] before the parser runs.
/// * Input without a single finite number fails with [`StatsError::NoValidData`].
/// * A panic inside parsing or aggregation is caught and returned as
///   [`StatsError::Unexpected`] carrying the panic message.
pub fn headless_calculate(input: &str, config: &StatsConfig) -> Result<Calculation, StatsError> {
    let input = input.trim_matches(is_blank);
    if input.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mode = config.parse_mode();
    let decimals = config.decimals();

    let parsed = run_guarded(|| parse_with_mode(input, mode))?;
    if parsed.is_empty() {
        debug!("No valid values among {} tokens", parsed.token_count());
        return Err(StatsError::NoValidData);
    }

    let record = run_guarded(|| aggregate_with_precision(&parsed.values, decimals))?;
    let record = record.ok_or(StatsError::NoValidData)?;
    debug!(
        "Calculation finished: count={}, invalid={}",
        record.count, parsed.invalid_count
    );

    Ok(Calculation {
        record,
        invalid_count: parsed.invalid_count,
    })
}

/// Runs `f`, turning a panic into [`StatsError::Unexpected`] with the panic
/// message.
fn run_guarded<T>(f: impl FnOnce() -> T + UnwindSafe) -> Result<T, StatsError> {
    panic::catch_unwind(f).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        error!("Calculation panicked: {}", message);
        StatsError::Unexpected(message)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "calculation panicked".to_string()
    }
}
