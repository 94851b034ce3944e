//! Tickerlab Core — indicator engine, domain types, signal rules, bar sources.
//!
//! This crate contains the heart of the analysis pipeline:
//! - Domain types (bars, periods, option-valued series, snapshots)
//! - Indicator trait plus the standard set (SMA, EMA, RSI, MACD)
//! - Rule-based buy/sell signal evaluation over the latest snapshot
//! - One-pass analysis engine with bar validation and quality warnings
//! - Bar sources behind a provider trait (CSV directory, seeded synthetic)
//! - TOML-backed indicator configuration

pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod indicators;
pub mod signals;
