// numstat-core/src/lib.rs
//! # numstat Core Library
//!
//! `numstat-core` provides the platform-independent logic behind numstat:
//! turning free-form text such as `"1, 2; 3 4"` into a list of numbers and
//! reducing that list to descriptive statistics.
//!
//! The library is pure and stateless. It does no terminal or file I/O apart
//! from loading configuration, and it never produces user-facing messages;
//! front ends decide how outcomes are presented.
//!
//! ## Modules
//!
//! * `parser`: Tokenizing and prefix/strict numeric parsing.
//! * `aggregator`: Mean, population standard deviation, min, max, range and count.
//! * `format`: Fixed-point rendering of statistics.
//! * `config`: YAML settings with embedded defaults.
//! * `headless`: One-shot parse + aggregate pipeline with outcome classification.
//! * `errors`: The `StatsError` taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use numstat_core::{aggregate, parse};
//!
//! let parsed = parse("10 abc 20 ; xyz 30");
//! assert_eq!(parsed.values, vec![10.0, 20.0, 30.0]);
//! assert_eq!(parsed.invalid_count, 2);
//!
//! let record = aggregate(&parsed.values).expect("non-empty dataset");
//! assert_eq!(record.mean, "20.000000");
//! assert_eq!(record.count, 3);
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod aggregator;
pub mod config;
pub mod errors;
pub mod format;
pub mod headless;
pub mod parser;

pub use aggregator::{aggregate, aggregate_with_precision, Statistics, StatisticsRecord};
pub use config::{merge_config, StatsConfig};
pub use errors::StatsError;
pub use format::{to_fixed, DEFAULT_DECIMALS, MAX_DECIMALS};
pub use headless::{headless_calculate, Calculation};
pub use parser::{parse, parse_token, parse_with_mode, tokenize, ParseMode, ParsedInput};
