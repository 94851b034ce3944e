//! Analysis pipeline: validate bars, compute the indicator set, snapshot
//! the latest row, evaluate signals.
//!
//! One request, one full recomputation. The engine keeps no state between
//! calls and returns either a complete `Analysis` or an error — never a
//! partial result.

use crate::config::{ConfigError, IndicatorConfig};
use crate::domain::{Bar, Snapshot};
use crate::indicators::{Ema, Indicator, IndicatorSet, Macd, Rsi, Sma};
use crate::signals::{self, Signal};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that abort an analysis request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no bars to analyze for '{symbol}'")]
    NoData { symbol: String },

    #[error("bar {index} ({date}): {field} is {value}, must be finite and non-negative")]
    InvalidBar {
        index: usize,
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },

    #[error("bar {index} ({date}) is not after the previous bar ({prev})")]
    OutOfOrder {
        index: usize,
        date: NaiveDate,
        prev: NaiveDate,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Complete output of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub symbol: String,
    pub indicators: IndicatorSet,
    pub snapshot: Snapshot,
    pub signals: Vec<Signal>,
    /// Non-fatal data-quality findings (inconsistent OHLC, zero volume).
    pub warnings: Vec<String>,
}

/// Run the full pipeline for one symbol.
pub fn analyze(
    symbol: &str,
    bars: &[Bar],
    config: &IndicatorConfig,
) -> Result<Analysis, AnalysisError> {
    config.validate()?;
    validate_bars(symbol, bars)?;

    debug!(symbol, bars = bars.len(), "computing indicator set");

    let warnings = quality_warnings(bars);
    let indicators = compute_indicator_set(bars, config);
    let snapshot = latest_snapshot(bars, &indicators, config);
    let signals = signals::evaluate(&snapshot, config);

    debug!(
        symbol,
        signals = signals.len(),
        warnings = warnings.len(),
        "analysis complete"
    );

    Ok(Analysis {
        symbol: symbol.to_string(),
        indicators,
        snapshot,
        signals,
        warnings,
    })
}

/// The standard indicator set in canonical column order.
fn standard_indicators(config: &IndicatorConfig) -> Vec<Box<dyn Indicator>> {
    vec![
        Box::new(Sma::new(config.sma_fast)),
        Box::new(Sma::new(config.sma_slow)),
        Box::new(Ema::new(config.ema_span)),
        Box::new(Rsi::new(config.rsi_period)),
        Box::new(Macd::line(config.macd_short, config.macd_long)),
        Box::new(Macd::signal(
            config.macd_short,
            config.macd_long,
            config.macd_signal,
        )),
    ]
}

/// Compute all standard indicator columns for a validated bar sequence.
pub fn compute_indicator_set(bars: &[Bar], config: &IndicatorConfig) -> IndicatorSet {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let dates: Vec<NaiveDate> = bars.iter().map(|b| b.date).collect();

    let mut set = IndicatorSet::new(dates);
    for indicator in standard_indicators(config) {
        let series = indicator.compute(&closes);
        debug_assert_eq!(
            series.len(),
            bars.len(),
            "indicator '{}' produced {} values for {} bars",
            indicator.name(),
            series.len(),
            bars.len()
        );
        set.insert(indicator.name(), series);
    }
    set
}

/// Validate the bar sequence: non-empty, finite non-negative fields,
/// strictly ascending dates. The first violation aborts the request.
pub fn validate_bars(symbol: &str, bars: &[Bar]) -> Result<(), AnalysisError> {
    if bars.is_empty() {
        return Err(AnalysisError::NoData {
            symbol: symbol.to_string(),
        });
    }

    for (index, bar) in bars.iter().enumerate() {
        if let Some((field, value)) = bar.invalid_field() {
            return Err(AnalysisError::InvalidBar {
                index,
                date: bar.date,
                field,
                value,
            });
        }
        if index > 0 {
            let prev = bars[index - 1].date;
            if bar.date <= prev {
                return Err(AnalysisError::OutOfOrder {
                    index,
                    date: bar.date,
                    prev,
                });
            }
        }
    }

    Ok(())
}

/// Non-fatal findings about the input data.
fn quality_warnings(bars: &[Bar]) -> Vec<String> {
    let mut warnings = Vec::new();

    for (index, bar) in bars.iter().enumerate() {
        if !bar.is_consistent() {
            warnings.push(format!(
                "bar {index} ({}): OHLC range is inconsistent",
                bar.date
            ));
        }
    }

    let zero_volume = bars.iter().filter(|b| b.volume == 0.0).count();
    if zero_volume > 0 {
        warnings.push(format!("{zero_volume} bar(s) have zero volume"));
    }

    warnings
}

/// Snapshot of the latest row: close plus the values the signal rules read.
fn latest_snapshot(bars: &[Bar], set: &IndicatorSet, config: &IndicatorConfig) -> Snapshot {
    let last = bars.len() - 1;
    let latest = &bars[last];
    Snapshot {
        date: latest.date,
        close: latest.close,
        rsi: set.value_at(&format!("RSI_{}", config.rsi_period), last),
        sma_fast: set.value_at(&format!("SMA_{}", config.sma_fast), last),
        sma_slow: set.value_at(&format!("SMA_{}", config.sma_slow), last),
    }
}
