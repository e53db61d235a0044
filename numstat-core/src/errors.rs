//! errors.rs - Custom error types for the numstat-core library.
//!
//! This module defines a structured error enum for the library. The variants
//! name the condition only; turning them into user-facing text is left to
//! whichever front end is driving the calculation.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `numstat-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StatsError {
    /// The raw input was empty or contained only whitespace.
    #[error("input is empty")]
    EmptyInput,

    /// The input had tokens, but none of them parsed to a finite number.
    #[error("no valid numeric data")]
    NoValidData,

    /// Parsing or aggregation failed in a way that was not anticipated.
    #[error("{0}")]
    Unexpected(String),

    /// A settings value is out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading a settings file failed.
    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl StatsError {
    /// Returns `true` for the two conditions caused by the content of the input
    /// itself, as opposed to a failure of the pipeline.
    pub fn is_input_error(&self) -> bool {
        matches!(self, StatsError::EmptyInput | StatsError::NoValidData)
    }
}
