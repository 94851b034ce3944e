//! Tickerlab CLI — analyze and sample commands.
//!
//! Commands:
//! - `analyze` — compute the standard indicator set for one symbol and print
//!   the report, optionally as JSON or exported as a CSV indicator table
//! - `sample` — write a deterministic synthetic bar CSV usable as
//!   `analyze --csv` input

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tickerlab_core::config::IndicatorConfig;
use tickerlab_core::data::{load_csv, trim_to_period, BarProvider, CsvProvider, SyntheticProvider};
use tickerlab_core::domain::{format_price, format_rsi, Bar, Period};
use tickerlab_core::engine::{analyze, Analysis};
use tickerlab_core::signals::NO_SIGNALS_MESSAGE;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tickerlab",
    about = "Tickerlab CLI — technical-analysis indicator engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute indicators and signals for one symbol and print the report.
    Analyze {
        /// Symbol to analyze (e.g., SPY).
        #[arg(long)]
        symbol: String,

        /// History window: 1mo, 3mo, 6mo, 1y, 2y, 5y.
        #[arg(long, default_value = "1y")]
        period: String,

        /// Load bars from one CSV file (date,open,high,low,close,volume).
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Load bars from <DIR>/<SYMBOL>.csv.
        #[arg(long)]
        csv_dir: Option<PathBuf>,

        /// Generate deterministic synthetic bars instead of reading files.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// TOML file overriding the standard indicator windows.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the full analysis as JSON instead of the text report.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Write the indicator table (date, close, all columns) as CSV.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Write a synthetic bar CSV usable as `analyze --csv` input.
    Sample {
        /// Symbol that seeds the random walk.
        #[arg(long)]
        symbol: String,

        /// History window: 1mo, 3mo, 6mo, 1y, 2y, 5y.
        #[arg(long, default_value = "1y")]
        period: String,

        /// Output file. Defaults to <SYMBOL>.csv.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            symbol,
            period,
            csv,
            csv_dir,
            synthetic,
            config,
            json,
            export,
        } => run_analyze(symbol, period, csv, csv_dir, synthetic, config, json, export),
        Commands::Sample {
            symbol,
            period,
            out,
        } => run_sample(symbol, period, out),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_analyze(
    symbol: String,
    period: String,
    csv: Option<PathBuf>,
    csv_dir: Option<PathBuf>,
    synthetic: bool,
    config_path: Option<PathBuf>,
    json: bool,
    export: Option<PathBuf>,
) -> Result<()> {
    let period: Period = period.parse()?;

    // Validate mutually exclusive sources
    match [csv.is_some(), csv_dir.is_some(), synthetic]
        .iter()
        .filter(|&&picked| picked)
        .count()
    {
        0 => bail!("one of --csv, --csv-dir, or --synthetic is required"),
        1 => {}
        _ => bail!("--csv, --csv-dir, and --synthetic are mutually exclusive"),
    }

    let config = match config_path {
        Some(path) => IndicatorConfig::from_file(&path)?,
        None => IndicatorConfig::default(),
    };

    let (bars, source) = if let Some(path) = csv {
        (trim_to_period(load_csv(&path)?, period), "csv".to_string())
    } else {
        let provider: Box<dyn BarProvider> = if let Some(dir) = csv_dir {
            Box::new(CsvProvider::new(dir))
        } else {
            Box::new(SyntheticProvider::new())
        };
        (provider.fetch(&symbol, period)?, provider.name().to_string())
    };

    let analysis = analyze(&symbol, &bars, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis, &config, period, &source);
    }

    if let Some(path) = export {
        write_export(&analysis, &bars, &path)?;
        println!("Indicator table saved to: {}", path.display());
    }

    Ok(())
}

fn run_sample(symbol: String, period: String, out: Option<PathBuf>) -> Result<()> {
    let period: Period = period.parse()?;
    let out = out.unwrap_or_else(|| PathBuf::from(format!("{symbol}.csv")));

    let provider = SyntheticProvider::new();
    let bars = provider.fetch(&symbol, period)?;

    let mut writer = csv::Writer::from_path(&out)?;
    for bar in &bars {
        writer.serialize(bar)?;
    }
    writer.flush()?;

    println!("Wrote {} synthetic bars to: {}", bars.len(), out.display());
    Ok(())
}

fn print_report(analysis: &Analysis, config: &IndicatorConfig, period: Period, source: &str) {
    let snapshot = &analysis.snapshot;

    println!();
    println!("=== Technical Analysis: {} ===", analysis.symbol);
    println!("Period:         {period}");
    println!("Source:         {source}");
    println!("Bars:           {}", analysis.indicators.len());
    println!();
    println!("--- Latest Values ({}) ---", snapshot.date);
    println!("{:<16}{}", "Close:", format_price(Some(snapshot.close)));
    println!(
        "{:<16}{}",
        format!("SMA {}:", config.sma_fast),
        format_price(snapshot.sma_fast)
    );
    println!(
        "{:<16}{}",
        format!("SMA {}:", config.sma_slow),
        format_price(snapshot.sma_slow)
    );
    println!(
        "{:<16}{}",
        format!("RSI {}:", config.rsi_period),
        format_rsi(snapshot.rsi)
    );
    println!();
    println!("--- Trading Signals ---");
    if analysis.signals.is_empty() {
        println!("{NO_SIGNALS_MESSAGE}");
    } else {
        for signal in &analysis.signals {
            println!("{}", signal.message);
        }
    }
    for warn in &analysis.warnings {
        println!("WARNING: {warn}");
    }
    println!();
}

/// Write the full indicator table as CSV: one row per bar, empty cells
/// where a column is undefined.
fn write_export(analysis: &Analysis, bars: &[Bar], path: &Path) -> Result<()> {
    let set = &analysis.indicators;

    let mut header = vec!["date".to_string(), "close".to_string()];
    header.extend(set.columns().iter().map(|c| c.name.clone()));

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&header)?;

    for (i, bar) in bars.iter().enumerate() {
        let mut record = vec![bar.date.to_string(), bar.close.to_string()];
        for column in set.columns() {
            record.push(match column.series.get(i) {
                Some(value) => value.to_string(),
                None => String::new(),
            });
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
