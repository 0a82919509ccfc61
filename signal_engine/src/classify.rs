//! Rule evaluation over an enriched series.
//!
//! The classifier looks only at the last bar `L` and the bar before it
//! `P`. Crossover rules are edge-triggered: they require the strict
//! transition between `P` and `L`, so a series whose crossover happened
//! on an earlier bar does not fire again after new bars arrive.
//!
//! Tie-break: sell rules are evaluated before buy rules, so when
//! conflicting indicators arm both directions on the same bar, Sell
//! wins. Within a direction the whale reading outranks the trend
//! crossover as the reported reason.

use crate::config::RuleConfig;
use crate::enriched::EnrichedSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

/// Which rule produced the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    WhaleBuy,
    WhaleSell,
    TrendBuy,
    TrendSell,
}

/// A directional call for the most recent bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub direction: Direction,
    pub reason: Reason,
    /// RSI at the signal bar; `None` when the window was degenerate.
    pub rsi_at_signal: Option<f64>,
    pub volume_at_signal: f64,
}

/// Outcome of one classifier run.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Fewer bars than the configured history floor; no call was made.
    InsufficientData,
    /// No rule fired.
    NoSignal { volume_explosion: bool },
    /// Exactly one directional call.
    Signal {
        classification: Classification,
        /// Informational, direction-free: volume above the explosion
        /// multiple of baseline.
        volume_explosion: bool,
    },
}

impl Verdict {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Verdict::Signal { classification, .. } => Some(classification.direction),
            _ => None,
        }
    }
}

/// Classifies the latest bar of `series` under `rules`.
///
/// Pure and deterministic: the same series and rules always produce the
/// same verdict.
pub fn classify(series: &EnrichedSeries, rules: &RuleConfig) -> Verdict {
    let n = series.len();
    // The configured floor never undercuts the indicator warm-up: a
    // series too short to settle its columns gets no call at all.
    if n < rules.effective_min_history().max(series.warmup()) {
        return Verdict::InsufficientData;
    }

    let bars = series.bars();
    let last = &bars[n - 1];
    let last_idx = n - 1;
    let prev_idx = n - 2;

    // Whale baseline: mean volume of the bars preceding the last,
    // excluding the last itself.
    let baseline = {
        let window = &bars[n - 1 - rules.baseline_window..n - 1];
        window.iter().map(|b| b.volume).sum::<f64>() / rules.baseline_window as f64
    };

    let volume_explosion = rules.enable_volume_explosion
        && baseline > 0.0
        && last.volume > rules.explosion_multiplier * baseline;

    // Shared whale preconditions: spiked volume on a small-bodied candle.
    // A zero baseline (dead market) or zero close never arms the rule.
    let whale_volume = baseline > 0.0 && last.volume > rules.spike_multiplier * baseline;
    let small_body =
        last.close > 0.0 && ((last.close - last.open).abs() / last.close) < rules.small_body_threshold;

    let whale_armed = rules.enable_whale && whale_volume && small_body;
    let whale_buy = whale_armed && last.is_green();
    let whale_sell = whale_armed && last.is_red() && {
        // Early-distribution guard: only flag while price has not yet
        // collapsed over the lookback.
        let reference = &bars[n - 1 - rules.collapse_lookback];
        reference.close > 0.0
            && (last.close - reference.close) / reference.close > rules.collapse_threshold
    };

    let rsi_last = series.rsi[last_idx];
    let (trend_buy, trend_sell) = if rules.enable_trend {
        trend_signals(series, rules, rsi_last, last_idx, prev_idx)
    } else {
        (false, false)
    };

    // Sell before buy: documented precedence for conflicting indicators.
    let reason = if whale_sell {
        Some(Reason::WhaleSell)
    } else if trend_sell {
        Some(Reason::TrendSell)
    } else if whale_buy {
        Some(Reason::WhaleBuy)
    } else if trend_buy {
        Some(Reason::TrendBuy)
    } else {
        None
    };

    match reason {
        Some(reason) => Verdict::Signal {
            classification: Classification {
                direction: match reason {
                    Reason::WhaleBuy | Reason::TrendBuy => Direction::Buy,
                    Reason::WhaleSell | Reason::TrendSell => Direction::Sell,
                },
                reason,
                rsi_at_signal: rsi_last,
                volume_at_signal: last.volume,
            },
            volume_explosion,
        },
        None => Verdict::NoSignal { volume_explosion },
    }
}

/// Evaluates the edge-triggered EMA crossover rules.
///
/// An undefined RSI at the last bar blocks both directions: a flat
/// window carries no momentum reading to qualify the crossover with.
fn trend_signals(
    series: &EnrichedSeries,
    rules: &RuleConfig,
    rsi_last: Option<f64>,
    last_idx: usize,
    prev_idx: usize,
) -> (bool, bool) {
    let Some(rsi) = rsi_last else {
        return (false, false);
    };

    let fast_l = series.ema_fast[last_idx];
    let slow_l = series.ema_slow[last_idx];
    let fast_p = series.ema_fast[prev_idx];
    let slow_p = series.ema_slow[prev_idx];

    let crossed_up = fast_l > slow_l && fast_p <= slow_p;
    let crossed_down = fast_l < slow_l && fast_p >= slow_p;

    let mut buy = crossed_up && rsi < rules.rsi_overbought;
    let mut sell = crossed_down && rsi > rules.rsi_oversold;

    if rules.require_confirmation {
        let macd_l = series.macd_line[last_idx];
        let macd_sig = series.macd_signal[last_idx];
        buy = buy && macd_l > macd_sig && rsi > 50.0;
        sell = sell && macd_l < macd_sig && rsi < 50.0;
    }

    (buy, sell)
}
