//! CSV-file bar source.
//!
//! One file per symbol: `<dir>/<SYMBOL>.csv` with header
//! `date,open,high,low,close,volume`, ISO dates, oldest first.

use crate::data::provider::{trim_to_period, BarProvider, DataError};
use crate::domain::{Bar, Period};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl From<CsvRow> for Bar {
    fn from(row: CsvRow) -> Self {
        Bar {
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        }
    }
}

/// Load all bars from one explicit CSV file.
pub fn load_csv(path: &Path) -> Result<Vec<Bar>, DataError> {
    let csv_error = |source| DataError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    let mut bars = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        bars.push(row.map_err(csv_error)?.into());
    }

    info!(path = %path.display(), bars = bars.len(), "loaded csv bars");
    Ok(bars)
}

/// Per-symbol CSV directory: bars for `AAPL` live in `<dir>/AAPL.csv`.
#[derive(Debug, Clone)]
pub struct CsvProvider {
    dir: PathBuf,
}

impl CsvProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{symbol}.csv"))
    }
}

impl BarProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(&self, symbol: &str, period: Period) -> Result<Vec<Bar>, DataError> {
        let path = self.path_for(symbol);
        if !path.exists() {
            return Err(DataError::SymbolNotFound {
                symbol: symbol.to_string(),
                path: path.display().to_string(),
            });
        }
        Ok(trim_to_period(load_csv(&path)?, period))
    }
}
