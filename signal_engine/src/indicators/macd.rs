//! Moving Average Convergence Divergence.

use super::ema::ema;

/// The two MACD columns, both defined from index 0 because the
/// underlying EMAs are seeded rather than warmed up.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    /// `ema(series, fast) − ema(series, slow)`.
    pub macd_line: Vec<f64>,
    /// `ema(macd_line, signal)`.
    pub signal_line: Vec<f64>,
}

pub fn macd(series: &[f64], fast: usize, slow: usize, signal: usize) -> MacdOutput {
    let fast_ema = ema(series, fast);
    let slow_ema = ema(series, slow);
    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ema(&macd_line, signal);
    MacdOutput {
        macd_line,
        signal_line,
    }
}
