//! Criterion benchmarks for tickerlab hot paths.
//!
//! Benchmarks:
//! 1. Indicator kernels (SMA, RSI, MACD signal over one series)
//! 2. Standard indicator set (all six columns in one pass)
//! 3. Full analysis pipeline (validate, compute, snapshot, evaluate)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tickerlab_core::config::IndicatorConfig;
use tickerlab_core::domain::Bar;
use tickerlab_core::engine::{analyze, compute_indicator_set};
use tickerlab_core::indicators::{Indicator, Macd, Rsi, Sma};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_bars(n: usize) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000.0 + (i % 500_000) as f64,
            }
        })
        .collect()
}

fn make_closes(n: usize) -> Vec<f64> {
    make_bars(n).iter().map(|b| b.close).collect()
}

// ── 1. Indicator Kernels ─────────────────────────────────────────────

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_kernels");
    let closes = make_closes(1260);

    let sma = Sma::new(200);
    group.bench_function("sma_200_1260_bars", |b| {
        b.iter(|| sma.compute(black_box(&closes)));
    });

    let rsi = Rsi::new(14);
    group.bench_function("rsi_14_1260_bars", |b| {
        b.iter(|| rsi.compute(black_box(&closes)));
    });

    let macd_signal = Macd::signal(12, 26, 9);
    group.bench_function("macd_signal_1260_bars", |b| {
        b.iter(|| macd_signal.compute(black_box(&closes)));
    });

    group.finish();
}

// ── 2. Standard Indicator Set ────────────────────────────────────────

fn bench_indicator_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_set");
    let config = IndicatorConfig::default();

    for &bar_count in &[252, 1260, 2520] {
        let bars = make_bars(bar_count);
        group.bench_with_input(
            BenchmarkId::new("standard_set", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| compute_indicator_set(black_box(&bars), black_box(&config)));
            },
        );
    }

    group.finish();
}

// ── 3. Full Analysis Pipeline ────────────────────────────────────────

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let config = IndicatorConfig::default();
    let bars = make_bars(1260);

    group.bench_function("pipeline_1260_bars", |b| {
        b.iter(|| analyze(black_box("BENCH"), black_box(&bars), black_box(&config)));
    });

    group.finish();
}

criterion_group!(benches, bench_kernels, bench_indicator_set, bench_analyze);
criterion_main!(benches);
