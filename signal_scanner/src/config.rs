//! Scanner configuration loaded from a TOML file.
//!
//! Every section has defaults, so an empty file is a valid config that
//! scans nothing (the universe falls back to the dynamic listing).
//! Credentials are never part of the file; they come from the
//! environment (`TELEGRAM_BOT_TOKEN`, optional `BINANCE_API_KEY`).

use std::path::Path;

use market_data::models::interval::Interval;
use market_data::providers::binance_rest::BinanceConfig;
use serde::Deserialize;
use signal_engine::EngineConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScannerConfigError {
    #[error(transparent)]
    File(#[from] shared_utils::config::ConfigError),

    #[error("Invalid engine settings: {0}")]
    Engine(#[from] signal_engine::ConfigError),

    #[error("cycle.concurrency must be at least 1")]
    ZeroConcurrency,

    #[error("cycle.bar_count ({bar_count}) is below the engine history floor ({floor})")]
    BarCountBelowFloor { bar_count: u32, floor: usize },
}

/// Which symbols to scan each cycle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Static symbol list. When empty, the provider's active listing
    /// filtered by `quote_asset` is used instead.
    pub symbols: Vec<String>,
    pub quote_asset: String,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            quote_asset: "USDT".to_string(),
        }
    }
}

/// Pacing and shape of one scan cycle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Bar interval requested from the provider.
    pub interval: Interval,
    /// How many of the most recent bars to fetch per symbol.
    pub bar_count: u32,
    /// Maximum symbols evaluated concurrently.
    pub concurrency: usize,
    /// Pause between cycles in watch mode.
    pub pause_secs: u64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            interval: Interval::Min15,
            bar_count: 200,
            concurrency: 4,
            pause_secs: 300,
        }
    }
}

/// Outbound notification settings (the bot token comes from the
/// `TELEGRAM_BOT_TOKEN` environment variable).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Telegram chat or channel the messages go to.
    pub chat_id: String,
    /// Per-request timeout for the notification transport.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub provider: BinanceConfig,
    pub universe: UniverseConfig,
    pub engine: EngineConfig,
    pub notify: NotifyConfig,
    pub cycle: CycleConfig,
}

impl ScannerConfig {
    /// Loads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScannerConfigError> {
        let config: Self = shared_utils::config::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScannerConfigError> {
        self.engine.validate()?;
        if self.cycle.concurrency == 0 {
            return Err(ScannerConfigError::ZeroConcurrency);
        }
        let floor = self
            .engine
            .rules
            .effective_min_history()
            .max(self.engine.indicators.warmup_floor());
        if (self.cycle.bar_count as usize) < floor {
            return Err(ScannerConfigError::BarCountBelowFloor {
                bar_count: self.cycle.bar_count,
                floor,
            });
        }
        Ok(())
    }
}
