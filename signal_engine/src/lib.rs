//! Indicator computation and signal classification for candle series.
//!
//! The crate is pure and synchronous: given the same bar sequence it
//! always produces the same verdict, so callers may evaluate many
//! symbols in parallel without coordination.
//!
//! Pipeline per symbol: `&[Bar]` → [`enriched::EnrichedSeries`] (parallel
//! indicator columns) → [`classify::classify`] → [`classify::Verdict`].

pub mod classify;
pub mod config;
pub mod enriched;
pub mod indicators;

pub use classify::{Classification, Direction, Reason, Verdict, classify};
pub use config::{ConfigError, EngineConfig, IndicatorConfig, RuleConfig};
pub use enriched::EnrichedSeries;
