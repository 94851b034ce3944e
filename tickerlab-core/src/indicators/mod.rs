//! Concrete indicator implementations.
//!
//! All indicators implement the `Indicator` trait: close series in, derived
//! `Series` out, same length, `None` for warmup positions. They are computed
//! once per analysis request and collected into an `IndicatorSet`.
//!
//! The two MACD outputs (line and signal) are exposed as separate named
//! instances of one struct, keeping the single-series `Indicator` trait
//! unchanged.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::{ema_of_series, Ema};
pub use macd::{Macd, MacdOutput};
pub use rsi::Rsi;
pub use sma::Sma;

use crate::domain::Series;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trait for indicators.
///
/// Indicators take the full close series and produce a `Series` of the same
/// length. The first `lookback()` positions are `None` (warmup).
///
/// # Look-ahead contamination guard
/// No indicator value at index t may depend on closes from index t+1 or
/// later. Every indicator must pass the truncated-vs-full series test.
pub trait Indicator: Send + Sync {
    /// Canonical column name (e.g., "SMA_50", "RSI_14").
    fn name(&self) -> &str;

    /// Number of leading positions that stay undefined once the input is
    /// long enough.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire close series.
    fn compute(&self, closes: &[f64]) -> Series;
}

/// One named column of an `IndicatorSet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorColumn {
    pub name: String,
    pub series: Series,
}

/// Named indicator columns over a shared date index.
///
/// Columns keep their insertion order, which is the canonical column order
/// for reports and exports. Every column has exactly one slot per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    dates: Vec<NaiveDate>,
    columns: Vec<IndicatorColumn>,
}

impl IndicatorSet {
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self {
            dates,
            columns: Vec::new(),
        }
    }

    /// Append a named series. Alignment with the date index is a caller
    /// invariant, checked in debug builds.
    pub fn insert(&mut self, name: impl Into<String>, series: Series) {
        debug_assert_eq!(
            series.len(),
            self.dates.len(),
            "series length does not match the date index"
        );
        self.columns.push(IndicatorColumn {
            name: name.into(),
            series,
        });
    }

    /// The shared date index, oldest first.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Full series for a named column.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.series)
    }

    /// Value of a named column at a date index.
    ///
    /// `None` covers all three misses: unknown column, out-of-range index,
    /// undefined value.
    pub fn value_at(&self, name: &str, index: usize) -> Option<f64> {
        self.get(name).and_then(|s| s.get(index))
    }

    /// Value of a named column at the final date.
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|s| s.last())
    }

    /// Columns in canonical (insertion) order.
    pub fn columns(&self) -> &[IndicatorColumn] {
        &self.columns
    }

    /// Number of rows, shared by the date index and every column.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
