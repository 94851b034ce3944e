//! Indicator window configuration.
//!
//! Window sizes for the standard indicator set. The defaults match the
//! common daily-chart setup (50/200 SMAs, 20 EMA, 14 RSI, 12/26/9 MACD);
//! a TOML file can override any subset of them.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    /// Fast SMA window (short leg of the golden/death cross).
    pub sma_fast: usize,
    /// Slow SMA window (long leg of the golden/death cross).
    pub sma_slow: usize,
    /// EMA span.
    pub ema_span: usize,
    /// RSI window.
    pub rsi_period: usize,
    /// MACD fast EMA span.
    pub macd_short: usize,
    /// MACD slow EMA span.
    pub macd_long: usize,
    /// MACD signal-line EMA span.
    pub macd_signal: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_fast: 50,
            sma_slow: 200,
            ema_span: 20,
            rsi_period: 14,
            macd_short: 12,
            macd_long: 26,
            macd_signal: 9,
        }
    }
}

impl IndicatorConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Check the window relationships the indicator constructors assume.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("sma_fast", self.sma_fast),
            ("sma_slow", self.sma_slow),
            ("ema_span", self.ema_span),
            ("rsi_period", self.rsi_period),
            ("macd_short", self.macd_short),
            ("macd_long", self.macd_long),
            ("macd_signal", self.macd_signal),
        ];
        for (field, value) in windows {
            if value == 0 {
                return Err(ConfigError::ZeroWindow { field });
            }
        }
        if self.sma_fast >= self.sma_slow {
            return Err(ConfigError::SmaOrder {
                fast: self.sma_fast,
                slow: self.sma_slow,
            });
        }
        if self.macd_short >= self.macd_long {
            return Err(ConfigError::MacdOrder {
                short: self.macd_short,
                long: self.macd_long,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be >= 1")]
    ZeroWindow { field: &'static str },

    #[error("sma_fast ({fast}) must be smaller than sma_slow ({slow})")]
    SmaOrder { fast: usize, slow: usize },

    #[error("macd_short ({short}) must be smaller than macd_long ({long})")]
    MacdOrder { short: usize, long: usize },
}
