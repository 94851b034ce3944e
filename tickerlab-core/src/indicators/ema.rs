//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1], with
//! alpha = 2 / (span + 1).
//! Seed: EMA[0] = close[0] — the first observation, not an SMA warmup.
//! Lookback: 0 (defined at every position).

use crate::domain::Series;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    name: String,
}

impl Ema {
    pub fn new(span: usize) -> Self {
        assert!(span >= 1, "EMA span must be >= 1");
        Self {
            span,
            name: format!("EMA_{span}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, closes: &[f64]) -> Series {
        ema_of_series(closes, self.span).into_iter().map(Some).collect()
    }
}

/// Raw EMA values for a pre-extracted f64 slice.
///
/// Used by composed indicators (MACD line and signal) that need the EMA of
/// an arbitrary series. The output has the same length as the input and is
/// defined everywhere: the recurrence starts from the first value.
pub fn ema_of_series(values: &[f64], span: usize) -> Vec<f64> {
    debug_assert!(span >= 1, "EMA span must be >= 1");
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut result = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let ema = match prev {
            None => value,
            Some(p) => alpha * value + (1.0 - alpha) * p,
        };
        result.push(ema);
        prev = Some(ema);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn ema_span_1_equals_close() {
        let ema = Ema::new(1);
        let result = ema.compute(&[100.0, 200.0, 300.0]);
        assert_eq!(result.get(0), Some(100.0));
        assert_eq!(result.get(1), Some(200.0));
        assert_eq!(result.get(2), Some(300.0));
    }

    #[test]
    fn ema_3_known_values() {
        // Closes: 10, 11, 12, 13, 14
        // alpha = 2/(3+1) = 0.5, seed EMA[0] = 10
        // EMA[1] = 0.5*11 + 0.5*10     = 10.5
        // EMA[2] = 0.5*12 + 0.5*10.5   = 11.25
        // EMA[3] = 0.5*13 + 0.5*11.25  = 12.125
        // EMA[4] = 0.5*14 + 0.5*12.125 = 13.0625
        let ema = Ema::new(3);
        let result = ema.compute(&[10.0, 11.0, 12.0, 13.0, 14.0]);

        assert_approx(result.get(0).unwrap(), 10.0, DEFAULT_EPSILON);
        assert_approx(result.get(1).unwrap(), 10.5, DEFAULT_EPSILON);
        assert_approx(result.get(2).unwrap(), 11.25, DEFAULT_EPSILON);
        assert_approx(result.get(3).unwrap(), 12.125, DEFAULT_EPSILON);
        assert_approx(result.get(4).unwrap(), 13.0625, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_is_defined_everywhere() {
        let ema = Ema::new(20);
        let result = ema.compute(&[10.0, 11.0, 12.0]);
        // Span longer than the input still yields a value at every index
        assert_eq!(result.len(), 3);
        assert_eq!(result.defined_count(), 3);
        assert_eq!(ema.lookback(), 0);
    }

    #[test]
    fn ema_single_close() {
        let result = Ema::new(5).compute(&[42.0]);
        assert_eq!(result.get(0), Some(42.0));
    }

    #[test]
    fn ema_of_series_matches_indicator() {
        let closes = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
        let indicator_result = Ema::new(3).compute(&closes);
        let series_result = ema_of_series(&closes, 3);
        for i in 0..closes.len() {
            assert_eq!(indicator_result.get(i), Some(series_result[i]));
        }
    }

    #[test]
    fn ema_of_series_empty_input() {
        assert!(ema_of_series(&[], 5).is_empty());
    }
}
