//! Domain types for the indicator engine.

pub mod bar;
pub mod period;
pub mod series;
pub mod snapshot;

pub use bar::Bar;
pub use period::{ParsePeriodError, Period};
pub use series::Series;
pub use snapshot::{format_price, format_rsi, Snapshot};

/// Create bars from close prices for testing.
///
/// Generates plausible OHLCV: open = prev close (or close for first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume 1000.
#[cfg(test)]
pub(crate) fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}
