//! Bar — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar for a single symbol on a single trading day.
///
/// All price fields and the volume must be finite and non-negative. The
/// engine rejects anything else before indicator math runs — values are
/// never clamped or repaired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// First field that is non-finite or negative, with its value.
    ///
    /// Returns `None` when the bar is acceptable engine input.
    pub fn invalid_field(&self) -> Option<(&'static str, f64)> {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    }

    /// Basic OHLC consistency: high is the top of the range, low the bottom.
    ///
    /// An inconsistent bar is still computable (only close feeds the
    /// indicators), so a failure here is a data-quality warning, not a
    /// rejection.
    pub fn is_consistent(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}
