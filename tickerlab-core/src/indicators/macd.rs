//! Moving Average Convergence/Divergence (MACD).
//!
//! Line: EMA(close, short) - EMA(close, long).
//! Signal: EMA(line, signal_span).
//!
//! Two outputs as separate named `Indicator` instances of one struct. The
//! EMAs seed from the first observation, so both series are defined at
//! every position. Lookback: 0.

use crate::domain::Series;
use crate::indicators::ema::ema_of_series;
use crate::indicators::Indicator;

/// Which MACD output to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdOutput {
    Line,
    Signal,
}

#[derive(Debug, Clone)]
pub struct Macd {
    short_span: usize,
    long_span: usize,
    signal_span: usize,
    output: MacdOutput,
    name: String,
}

impl Macd {
    /// The MACD line: EMA(close, short) - EMA(close, long).
    pub fn line(short_span: usize, long_span: usize) -> Self {
        assert!(short_span >= 1, "MACD short span must be >= 1");
        assert!(short_span < long_span, "MACD short span must be < long span");
        Self {
            short_span,
            long_span,
            signal_span: 1,
            output: MacdOutput::Line,
            name: "MACD".to_string(),
        }
    }

    /// The signal line: EMA of the MACD line.
    pub fn signal(short_span: usize, long_span: usize, signal_span: usize) -> Self {
        assert!(short_span >= 1, "MACD short span must be >= 1");
        assert!(short_span < long_span, "MACD short span must be < long span");
        assert!(signal_span >= 1, "MACD signal span must be >= 1");
        Self {
            short_span,
            long_span,
            signal_span,
            output: MacdOutput::Signal,
            name: "MACD_signal".to_string(),
        }
    }

    fn line_values(&self, closes: &[f64]) -> Vec<f64> {
        let short = ema_of_series(closes, self.short_span);
        let long = ema_of_series(closes, self.long_span);
        short.into_iter().zip(long).map(|(s, l)| s - l).collect()
    }
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, closes: &[f64]) -> Series {
        let line = self.line_values(closes);
        let values = match self.output {
            MacdOutput::Line => line,
            MacdOutput::Signal => ema_of_series(&line, self.signal_span),
        };
        values.into_iter().map(Some).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    fn wavy_closes(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect()
    }

    #[test]
    fn macd_line_equals_ema_difference() {
        let closes = wavy_closes(80);
        let line = Macd::line(12, 26).compute(&closes);
        let short = ema_of_series(&closes, 12);
        let long = ema_of_series(&closes, 26);

        for i in 0..closes.len() {
            assert_approx(line.get(i).unwrap(), short[i] - long[i], 1e-9);
        }
    }

    #[test]
    fn macd_constant_series_is_zero() {
        let closes = vec![250.0; 40];
        let line = Macd::line(12, 26).compute(&closes);
        let signal = Macd::signal(12, 26, 9).compute(&closes);
        for i in 0..closes.len() {
            assert_approx(line.get(i).unwrap(), 0.0, DEFAULT_EPSILON);
            assert_approx(signal.get(i).unwrap(), 0.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn macd_is_defined_everywhere() {
        // Shorter than the long span, still fully defined
        let closes = wavy_closes(10);
        let line = Macd::line(12, 26).compute(&closes);
        let signal = Macd::signal(12, 26, 9).compute(&closes);
        assert_eq!(line.defined_count(), 10);
        assert_eq!(signal.defined_count(), 10);
        assert_eq!(Macd::line(12, 26).lookback(), 0);
    }

    #[test]
    fn macd_signal_smooths_the_line() {
        let closes = wavy_closes(80);
        let line = Macd::line(12, 26).compute(&closes);
        let signal = Macd::signal(12, 26, 9).compute(&closes);

        // Signal is an EMA of the line, so it stays inside the line's
        // running min/max envelope.
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for i in 0..closes.len() {
            let l = line.get(i).unwrap();
            min = min.min(l);
            max = max.max(l);
            let s = signal.get(i).unwrap();
            assert!(s >= min - 1e-12 && s <= max + 1e-12);
        }
    }

    #[test]
    fn macd_output_names() {
        assert_eq!(Macd::line(12, 26).name(), "MACD");
        assert_eq!(Macd::signal(12, 26, 9).name(), "MACD_signal");
    }

    #[test]
    #[should_panic(expected = "short span must be < long span")]
    fn macd_rejects_inverted_spans() {
        let _ = Macd::line(26, 12);
    }
}
