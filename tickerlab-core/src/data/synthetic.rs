//! Deterministic synthetic bar source.
//!
//! Random-walk daily bars with weekends skipped, seeded per symbol so the
//! same request always produces the same series. Meant for demos, tests,
//! and benchmarks; the provenance label keeps it from passing as market
//! data.

use crate::data::provider::{BarProvider, DataError};
use crate::domain::{Bar, Period};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    end: NaiveDate,
}

impl SyntheticProvider {
    /// History ending today.
    pub fn new() -> Self {
        Self {
            end: chrono::Local::now().date_naive(),
        }
    }

    /// History ending at a fixed date, for reproducible output.
    pub fn ending_at(end: NaiveDate) -> Self {
        Self { end }
    }
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl BarProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(&self, symbol: &str, period: Period) -> Result<Vec<Bar>, DataError> {
        let start = period.cutoff(self.end);
        let bars = generate_bars(symbol, start, self.end);
        info!(symbol, bars = bars.len(), "generated synthetic bars");
        Ok(bars)
    }
}

/// Random walk from 100.0 over weekdays in `[start, end]`, seeded from the
/// symbol name.
pub fn generate_bars(symbol: &str, start: NaiveDate, end: NaiveDate) -> Vec<Bar> {
    let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut bars = Vec::new();
    let mut price = 100.0_f64;
    let mut current = start;

    while current <= end {
        let weekday = current.weekday();
        if weekday == Weekday::Sat || weekday == Weekday::Sun {
            current += chrono::Duration::days(1);
            continue;
        }

        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        let open = price;
        let close = price * (1.0 + daily_return);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
        let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
        let volume = rng.gen_range(500_000..5_000_000u64) as f64;

        bars.push(Bar {
            date: current,
            open,
            high,
            low,
            close,
            volume,
        });

        price = close;
        current += chrono::Duration::days(1);
    }

    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validate_bars;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn synthetic_bars_are_deterministic() {
        let bars1 = generate_bars("SPY", jan(1), jan(31));
        let bars2 = generate_bars("SPY", jan(1), jan(31));

        assert_eq!(bars1, bars2);
        assert!(!bars1.is_empty());
    }

    #[test]
    fn different_symbols_get_different_walks() {
        let spy = generate_bars("SPY", jan(1), jan(31));
        let qqq = generate_bars("QQQ", jan(1), jan(31));

        assert_eq!(spy.len(), qqq.len());
        assert_ne!(spy[0].close, qqq[0].close);
    }

    #[test]
    fn weekends_are_skipped() {
        let bars = generate_bars("SPY", jan(1), jan(31));
        assert!(bars.iter().all(|b| {
            b.date.weekday() != Weekday::Sat && b.date.weekday() != Weekday::Sun
        }));
        // January 2024: 23 weekdays
        assert_eq!(bars.len(), 23);
    }

    #[test]
    fn generated_bars_pass_engine_validation() {
        let provider = SyntheticProvider::ending_at(jan(31));
        let bars = provider.fetch("SPY", Period::SixMonths).unwrap();
        assert!(validate_bars("SPY", &bars).is_ok());
    }

    #[test]
    fn period_window_is_respected() {
        let provider = SyntheticProvider::ending_at(jan(31));
        let bars = provider.fetch("SPY", Period::OneMonth).unwrap();

        let cutoff = Period::OneMonth.cutoff(jan(31));
        assert!(bars.first().unwrap().date >= cutoff);
        assert!(bars.last().unwrap().date <= jan(31));
    }
}
