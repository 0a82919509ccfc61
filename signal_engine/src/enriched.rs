//! A bar sequence with its indicator columns attached.

use market_data::models::bar::Bar;

use crate::config::IndicatorConfig;
use crate::indicators::{ema, macd, rsi, volume_average};

/// A bar sequence plus parallel indicator sequences of identical length.
///
/// Invariant: every column has the same length as `bars`, and column
/// index `i` describes `bars[i]`. Warm-up positions in the `Option`
/// columns are `None` and must never be compared as if defined. Values
/// are computed once at construction; the struct is never mutated.
#[derive(Debug, Clone)]
pub struct EnrichedSeries {
    bars: Vec<Bar>,
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub rsi: Vec<Option<f64>>,
    pub macd_line: Vec<f64>,
    pub macd_signal: Vec<f64>,
    pub vol_avg: Vec<Option<f64>>,
    warmup: usize,
}

impl EnrichedSeries {
    /// Computes every indicator column for `bars`.
    pub fn from_bars(bars: &[Bar], config: &IndicatorConfig) -> Self {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

        let macd_out = macd(
            &closes,
            config.macd_fast_period,
            config.macd_slow_period,
            config.macd_signal_period,
        );

        Self {
            bars: bars.to_vec(),
            ema_fast: ema(&closes, config.ema_fast_period),
            ema_slow: ema(&closes, config.ema_slow_period),
            rsi: rsi(&closes, config.rsi_period),
            macd_line: macd_out.macd_line,
            macd_signal: macd_out.signal_line,
            vol_avg: volume_average(&volumes, config.volume_window),
            warmup: config.warmup_floor(),
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Bars needed before the columns are settled enough to classify,
    /// as derived from the periods this series was built with.
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn flat_bars(count: usize) -> Vec<Bar> {
        (0..count)
            .map(|i| Bar {
                timestamp: Utc.timestamp_opt(1_700_000_000 + i as i64 * 60, 0).unwrap(),
                open: 100.0,
                high: 100.0,
                low: 100.0,
                close: 100.0,
                volume: 50.0,
            })
            .collect()
    }

    #[test]
    fn all_columns_parallel_to_bars() {
        let bars = flat_bars(40);
        let series = EnrichedSeries::from_bars(&bars, &IndicatorConfig::default());
        assert_eq!(series.len(), 40);
        assert_eq!(series.ema_fast.len(), 40);
        assert_eq!(series.ema_slow.len(), 40);
        assert_eq!(series.rsi.len(), 40);
        assert_eq!(series.macd_line.len(), 40);
        assert_eq!(series.macd_signal.len(), 40);
        assert_eq!(series.vol_avg.len(), 40);
    }

    #[test]
    fn construction_is_idempotent() {
        let bars = flat_bars(30);
        let cfg = IndicatorConfig::default();
        let a = EnrichedSeries::from_bars(&bars, &cfg);
        let b = EnrichedSeries::from_bars(&bars, &cfg);
        assert_eq!(a.ema_fast, b.ema_fast);
        assert_eq!(a.rsi, b.rsi);
        assert_eq!(a.macd_line, b.macd_line);
        assert_eq!(a.vol_avg, b.vol_avg);
    }

    #[test]
    fn flat_series_has_undefined_rsi_and_constant_emas() {
        let bars = flat_bars(40);
        let series = EnrichedSeries::from_bars(&bars, &IndicatorConfig::default());
        assert!(series.rsi.iter().all(Option::is_none));
        assert!(series.ema_fast.iter().all(|v| (v - 100.0).abs() < 1e-12));
    }
}
