//! Engine configuration: indicator periods and rule thresholds.
//!
//! Every knob has a serde default so a config file only needs to name
//! what it overrides. The historical script variants (RSI-only vs. full
//! trend+whale) are reproduced by toggling the `enable_*` flags rather
//! than by separate code paths.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be at least 1")]
    ZeroPeriod { name: &'static str },

    #[error("ema_fast_period ({fast}) must be smaller than ema_slow_period ({slow})")]
    FastNotBelowSlow { fast: usize, slow: usize },

    #[error("{name} must be a finite, positive multiplier")]
    BadMultiplier { name: &'static str },
}

/// Periods for the indicator columns attached to a series.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub ema_fast_period: usize,
    pub ema_slow_period: usize,
    pub rsi_period: usize,
    pub macd_fast_period: usize,
    pub macd_slow_period: usize,
    pub macd_signal_period: usize,
    /// Window of the rolling volume average column.
    pub volume_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ema_fast_period: 9,
            ema_slow_period: 21,
            rsi_period: 14,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            volume_window: 10,
        }
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("ema_fast_period", self.ema_fast_period),
            ("ema_slow_period", self.ema_slow_period),
            ("rsi_period", self.rsi_period),
            ("macd_fast_period", self.macd_fast_period),
            ("macd_slow_period", self.macd_slow_period),
            ("macd_signal_period", self.macd_signal_period),
            ("volume_window", self.volume_window),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroPeriod { name });
            }
        }
        if self.ema_fast_period >= self.ema_slow_period {
            return Err(ConfigError::FastNotBelowSlow {
                fast: self.ema_fast_period,
                slow: self.ema_slow_period,
            });
        }
        Ok(())
    }

    /// Bars needed before every indicator column carries a settled
    /// value: the slow EMA span, one full RSI window plus its seed bar,
    /// and the MACD slow EMA plus its signal line.
    pub fn warmup_floor(&self) -> usize {
        self.ema_slow_period
            .max(self.rsi_period + 1)
            .max(self.macd_slow_period + self.macd_signal_period)
    }
}

/// Thresholds and toggles for the classification rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// EMA crossover rules.
    pub enable_trend: bool,
    /// High-volume absorption rules.
    pub enable_whale: bool,
    /// Informational volume-explosion flag.
    pub enable_volume_explosion: bool,
    /// Stricter trend variant: MACD direction and RSI side of 50 must
    /// agree with the crossover.
    pub require_confirmation: bool,

    /// Whale rule fires above `spike_multiplier × baseline` volume.
    pub spike_multiplier: f64,
    /// Explosion flag fires above `explosion_multiplier × baseline`.
    pub explosion_multiplier: f64,
    /// Maximum relative candle body `|close - open| / close` for the
    /// whale (absorption) reading.
    pub small_body_threshold: f64,
    /// How many bars back the whale-sell collapse guard compares against.
    pub collapse_lookback: usize,
    /// Whale-sell only fires while the move over the lookback is still
    /// above this (negative) fraction, i.e. the drop has not happened yet.
    pub collapse_threshold: f64,

    /// Trend-buy is blocked at or above this RSI.
    pub rsi_overbought: f64,
    /// Trend-sell is blocked at or below this RSI.
    pub rsi_oversold: f64,

    /// Bars of volume preceding the last bar that form the whale baseline.
    pub baseline_window: usize,
    /// Series shorter than this are reported as insufficient data.
    pub min_history: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enable_trend: true,
            enable_whale: true,
            enable_volume_explosion: true,
            require_confirmation: false,
            spike_multiplier: 2.0,
            explosion_multiplier: 3.0,
            small_body_threshold: 0.03,
            collapse_lookback: 3,
            collapse_threshold: -0.03,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            baseline_window: 10,
            min_history: 50,
        }
    }
}

impl RuleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("spike_multiplier", self.spike_multiplier),
            ("explosion_multiplier", self.explosion_multiplier),
            ("small_body_threshold", self.small_body_threshold),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::BadMultiplier { name });
            }
        }
        if self.baseline_window == 0 {
            return Err(ConfigError::ZeroPeriod {
                name: "baseline_window",
            });
        }
        if self.min_history == 0 {
            return Err(ConfigError::ZeroPeriod {
                name: "min_history",
            });
        }
        Ok(())
    }

    /// Smallest series length the classifier will accept under this
    /// config: the configured floor, but never below what the baseline
    /// and lookback windows themselves need. The indicator warm-up
    /// floor is applied on top of this in [`crate::classify`].
    pub fn effective_min_history(&self) -> usize {
        self.min_history
            .max(self.baseline_window + 1)
            .max(self.collapse_lookback + 1)
            .max(2)
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub indicators: IndicatorConfig,
    pub rules: RuleConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indicators.validate()?;
        self.rules.validate()
    }
}
