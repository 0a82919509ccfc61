//! Notification message formatting.

use market_data::models::interval::Interval;
use signal_engine::{Classification, Direction, Reason};

/// Renders the two-line notification for a signal, e.g.:
///
/// ```text
/// ✅ BUY signal - BTCUSDT (15m) [whale]
/// RSI: 56.3  Vol: 128340
/// ```
pub fn format_signal(
    symbol: &str,
    interval: Interval,
    classification: &Classification,
    volume_explosion: bool,
) -> String {
    let (marker, direction) = match classification.direction {
        Direction::Buy => ("✅", "BUY"),
        Direction::Sell => ("⚠️", "SELL"),
    };
    let reason = match classification.reason {
        Reason::WhaleBuy | Reason::WhaleSell => "whale",
        Reason::TrendBuy | Reason::TrendSell => "trend",
    };
    let rsi = match classification.rsi_at_signal {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    };
    let explosion = if volume_explosion { "  (volume explosion)" } else { "" };

    format!(
        "{marker} {direction} signal - {symbol} ({interval}) [{reason}]\n\
         RSI: {rsi}  Vol: {:.0}{explosion}",
        classification.volume_at_signal
    )
}
