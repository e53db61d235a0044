// numstat-core/src/aggregator.rs
//! Reduces a parsed dataset into descriptive statistics.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

use crate::format::{to_fixed, DEFAULT_DECIMALS};

/// Raw descriptive statistics for a non-empty dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (divisor `n`).
    pub std_dev: f64,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    /// `max - min`.
    pub range: f64,
}

/// The rendered form of [`Statistics`], as shown to users.
///
/// Every floating field carries a fixed number of decimal places; `count`
/// stays an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsRecord {
    pub mean: String,
    pub std_dev: String,
    pub count: usize,
    pub min: String,
    pub max: String,
    pub range: String,
}

impl Statistics {
    /// Computes the statistics of `data`, or `None` when it is empty.
    pub fn compute(data: &[f64]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let count = data.len();
        let n = count as f64;

        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let sum = data.iter().fold(0.0, |acc, v| acc + v);
        let mean = if sum.is_finite() {
            sum / n
        } else {
            // The running sum overflowed; divide first.
            data.iter().fold(0.0, |acc, v| acc + v / n)
        };
        // Rounding can push the mean a hair outside [min, max]; identical
        // values must yield exactly that value.
        let mean = mean.clamp(min, max);

        let squared_diffs = data.iter().fold(0.0, |acc, v| acc + (v - mean).powi(2));
        let std_dev = (squared_diffs / n).sqrt();

        Some(Statistics {
            mean,
            std_dev,
            count,
            min,
            max,
            range: max - min,
        })
    }

    /// Renders every floating field with `decimals` digits after the point.
    pub fn to_record(&self, decimals: usize) -> StatisticsRecord {
        StatisticsRecord {
            mean: to_fixed(self.mean, decimals),
            std_dev: to_fixed(self.std_dev, decimals),
            count: self.count,
            min: to_fixed(self.min, decimals),
            max: to_fixed(self.max, decimals),
            range: to_fixed(self.range, decimals),
        }
    }
}

/// Aggregates `data` into a record with six decimal places.
///
/// Returns `None` for an empty dataset. That is not an error; callers decide
/// how to present "no valid data".
pub fn aggregate(data: &[f64]) -> Option<StatisticsRecord> {
    aggregate_with_precision(data, DEFAULT_DECIMALS)
}

/// Same as [`aggregate`] with a caller-chosen number of decimal places.
pub fn aggregate_with_precision(data: &[f64], decimals: usize) -> Option<StatisticsRecord> {
    Statistics::compute(data).map(|stats| stats.to_record(decimals))
}
