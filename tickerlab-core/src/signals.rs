//! Rule-based trading signals from the latest analysis row.
//!
//! Four rules, evaluated independently in a fixed order against the most
//! recent `Snapshot`. A rule whose inputs are undefined is skipped silently
//! — short history must not fabricate a reading.

use crate::config::IndicatorConfig;
use crate::domain::Snapshot;
use serde::{Deserialize, Serialize};

/// RSI below this reads as oversold.
pub const RSI_OVERSOLD_THRESHOLD: f64 = 30.0;

/// RSI above this reads as overbought.
pub const RSI_OVERBOUGHT_THRESHOLD: f64 = 70.0;

/// Shown by presentation layers when no rule fires.
pub const NO_SIGNALS_MESSAGE: &str = "No strong buy/sell signals detected.";

/// The rule that produced a signal, in canonical evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalKind {
    RsiOversold,
    RsiOverbought,
    GoldenCross,
    DeathCross,
}

/// A fired rule with its display message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub message: String,
}

/// Evaluate all rules against the latest row.
///
/// Emission order is fixed: RSI oversold, RSI overbought, golden cross,
/// death cross. All comparisons are strict, so an RSI of exactly 30/70 or
/// equal moving averages fire nothing. The cross messages carry the
/// configured SMA windows.
pub fn evaluate(snapshot: &Snapshot, config: &IndicatorConfig) -> Vec<Signal> {
    let mut signals = Vec::new();

    if let Some(rsi) = snapshot.rsi {
        if rsi < RSI_OVERSOLD_THRESHOLD {
            signals.push(Signal {
                kind: SignalKind::RsiOversold,
                message: "BUY: RSI is oversold (<30)".to_string(),
            });
        }
        if rsi > RSI_OVERBOUGHT_THRESHOLD {
            signals.push(Signal {
                kind: SignalKind::RsiOverbought,
                message: "SELL: RSI is overbought (>70)".to_string(),
            });
        }
    }

    if let (Some(fast), Some(slow)) = (snapshot.sma_fast, snapshot.sma_slow) {
        if fast > slow {
            signals.push(Signal {
                kind: SignalKind::GoldenCross,
                message: format!(
                    "BUY: Golden Cross ({}-day SMA above {}-day SMA)",
                    config.sma_fast, config.sma_slow
                ),
            });
        }
        if fast < slow {
            signals.push(Signal {
                kind: SignalKind::DeathCross,
                message: format!(
                    "SELL: Death Cross ({}-day SMA below {}-day SMA)",
                    config.sma_fast, config.sma_slow
                ),
            });
        }
    }

    signals
}
