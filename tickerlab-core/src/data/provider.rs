//! Data-source seam: providers produce bars, the engine never does I/O.

use crate::domain::{Bar, Period};
use thiserror::Error;

/// Errors from the data-source layer.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("csv error in '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("no data file for symbol '{symbol}' (looked for '{path}')")]
    SymbolNotFound { symbol: String, path: String },
}

/// A source of daily bars for one symbol over one lookback period.
///
/// Implementations own all I/O; the bars they return feed straight into
/// `engine::analyze`.
pub trait BarProvider {
    /// Short provenance label ("csv", "synthetic") for logs and reports.
    fn name(&self) -> &str;

    /// Daily bars for `symbol`, trimmed to `period`, oldest first.
    fn fetch(&self, symbol: &str, period: Period) -> Result<Vec<Bar>, DataError>;
}

/// Keep only bars inside the period window ending at the last bar's date.
///
/// The cutoff is computed from the data's own end, not the wall clock, so
/// archived files analyze reproducibly.
pub fn trim_to_period(bars: Vec<Bar>, period: Period) -> Vec<Bar> {
    let Some(last) = bars.last() else {
        return bars;
    };
    let cutoff = period.cutoff(last.date);
    bars.into_iter().filter(|b| b.date >= cutoff).collect()
}
