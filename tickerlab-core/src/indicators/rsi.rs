//! Relative Strength Index (RSI), simple-average flavor.
//!
//! Per-bar close deltas split into gains and losses, averaged with plain
//! rolling means over the window (no Wilder smoothing), then
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//!
//! The first delta needs a prior close, so the first defined value sits at
//! index `period`. Lookback: period.
//!
//! Division guards: a window with no losses reads 100, a window with no
//! movement at all reads 50.

use crate::domain::Series;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("RSI_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, closes: &[f64]) -> Series {
        let n = closes.len();
        let p = self.period;
        let mut result = vec![None; n];

        if n < p + 1 {
            return Series::new(result);
        }

        // deltas[k] = closes[k+1] - closes[k]
        let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

        for i in p..n {
            // The p deltas ending at close i. Each window sums from scratch:
            // the sums stay non-negative, so RSI cannot drift out of [0,100].
            let window = &deltas[i - p..i];
            let (gain_sum, loss_sum) = window.iter().fold((0.0, 0.0), |(g, l), &d| {
                if d > 0.0 {
                    (g + d, l)
                } else {
                    (g, l + d.abs())
                }
            });
            result[i] = Some(rsi_from_averages(gain_sum / p as f64, loss_sum / p as f64));
        }

        Series::new(result)
    }
}

/// RSI from already-averaged gain/loss, with the zero-loss guards.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain > 0.0 {
            100.0
        } else {
            50.0
        }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn rsi_all_gains_is_100() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let result = Rsi::new(14).compute(&closes);
        for i in 14..20 {
            assert_approx(result.get(i).unwrap(), 100.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        let result = Rsi::new(14).compute(&closes);
        for i in 14..20 {
            assert_approx(result.get(i).unwrap(), 0.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn rsi_flat_is_50() {
        let closes = vec![100.0; 20];
        let result = Rsi::new(14).compute(&closes);
        for i in 14..20 {
            assert_approx(result.get(i).unwrap(), 50.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn rsi_known_value() {
        // Deltas over period 5: +0.34, -0.25, +0.06, -0.54, +0.72
        // avg_gain = (0.34 + 0.06 + 0.72) / 5 = 0.224
        // avg_loss = (0.25 + 0.54) / 5 = 0.158
        // RSI = 100 - 100 / (1 + 0.224/0.158) = 58.6387...
        let closes = [44.0, 44.34, 44.09, 44.15, 43.61, 44.33];
        let result = Rsi::new(5).compute(&closes);
        assert_approx(result.get(5).unwrap(), 58.63874345549738, 1e-9);
    }

    #[test]
    fn rsi_warmup_is_undefined() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + (i as f64) * 0.5).collect();
        let result = Rsi::new(14).compute(&closes);
        assert_eq!(result.leading_undefined(), 14);
        assert!(result.get(14).is_some());
        assert_eq!(Rsi::new(14).lookback(), 14);
    }

    #[test]
    fn rsi_too_few_closes_is_all_undefined() {
        // Needs period + 1 closes for the first value
        let closes: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
        let result = Rsi::new(14).compute(&closes);
        assert_eq!(result.defined_count(), 0);
    }

    #[test]
    fn rsi_stays_in_bounds() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + ((i * 7919) % 23) as f64 - 11.0)
            .collect();
        let result = Rsi::new(14).compute(&closes);
        for value in result.iter().flatten() {
            assert!((0.0..=100.0).contains(value), "RSI out of bounds: {value}");
        }
    }

    #[test]
    fn rsi_name_carries_period() {
        assert_eq!(Rsi::new(14).name(), "RSI_14");
    }
}
