//! Relative Strength Index.

/// RSI over per-step closes with SMA-smoothed average gain and loss.
///
/// The step delta is undefined at index 0, so the first defined output
/// sits at index `period`. Degenerate windows resolve as:
///
/// * `avg_loss == 0 && avg_gain > 0` → saturated at `Some(100.0)`
/// * `avg_loss == 0 && avg_gain == 0` (flat price) → `None`
///
/// The flat-price case is deliberately "no signal" rather than a neutral
/// 50: a market that has not moved carries no trend information and must
/// never arm a trend rule.
pub fn rsi(series: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = series.len();
    let mut out = vec![None; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let delta = series[i] - series[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    // Rolling sums over the last `period` deltas; deltas start at index 1.
    let mut gain_sum: f64 = gains[1..=period].iter().sum();
    let mut loss_sum: f64 = losses[1..=period].iter().sum();
    out[period] = rsi_value(gain_sum, loss_sum, period);
    for i in period + 1..n {
        gain_sum += gains[i] - gains[i - period];
        loss_sum += losses[i] - losses[i - period];
        out[i] = rsi_value(gain_sum, loss_sum, period);
    }
    out
}

fn rsi_value(gain_sum: f64, loss_sum: f64, period: usize) -> Option<f64> {
    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return None;
        }
        return Some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}
