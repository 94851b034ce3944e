//! Latest-row view of an analysis and its display formatting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The most recent bar's close together with the indicator values the
/// signal rules read.
///
/// Indicator slots are `None` when the history is too short to define
/// them; the signal evaluator skips the affected rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub close: f64,
    pub rsi: Option<f64>,
    pub sma_fast: Option<f64>,
    pub sma_slow: Option<f64>,
}

/// Price display: two decimals, `n/a` when undefined.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

/// RSI display: one decimal, `n/a` when undefined.
pub fn format_rsi(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "n/a".to_string(),
    }
}
