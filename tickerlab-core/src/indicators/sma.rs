//! Simple Moving Average (SMA).
//!
//! Arithmetic mean of close prices over a trailing window.
//! Lookback: period - 1 (first defined value at index period-1).

use crate::domain::Series;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            name: format!("SMA_{period}"),
        }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, closes: &[f64]) -> Series {
        let n = closes.len();
        let mut result = vec![None; n];

        if n < self.period {
            return Series::new(result);
        }

        // Initial window sum, then roll forward
        let mut sum: f64 = closes.iter().take(self.period).sum();
        result[self.period - 1] = Some(sum / self.period as f64);

        for i in self.period..n {
            sum = sum - closes[i - self.period] + closes[i];
            result[i] = Some(sum / self.period as f64);
        }

        Series::new(result)
    }
}
