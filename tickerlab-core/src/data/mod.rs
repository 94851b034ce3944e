//! Bar sources.
//!
//! Everything upstream of the engine goes through [`BarProvider`]: a CSV
//! directory provider for real exports and a seeded synthetic provider for
//! demos and tests. One-off files load through [`load_csv`] directly.

pub mod csv_file;
pub mod provider;
pub mod synthetic;

pub use csv_file::{load_csv, CsvProvider};
pub use provider::{trim_to_period, BarProvider, DataError};
pub use synthetic::SyntheticProvider;
