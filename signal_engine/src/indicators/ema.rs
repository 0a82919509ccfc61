//! Exponential moving average.

/// EMA with smoothing factor `α = 2 / (period + 1)`, seeded with the
/// first element:
///
/// ```text
/// ema[0] = series[0]
/// ema[i] = α·series[i] + (1 − α)·ema[i-1]
/// ```
///
/// This is the pandas `ewm(span=period, adjust=False)` recurrence and is
/// defined at every index. MACD is built on top of it, so the exact seed
/// matters.
pub fn ema(series: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(series.len());
    let mut prev = 0.0;
    for (i, value) in series.iter().enumerate() {
        prev = if i == 0 {
            *value
        } else {
            alpha * value + (1.0 - alpha) * prev
        };
        out.push(prev);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_pandas_ewm_adjust_false() {
        // pd.Series([10,11,12,13]).ewm(span=3, adjust=False).mean()
        // alpha = 0.5
        let out = ema(&[10.0, 11.0, 12.0, 13.0], 3);
        let expected = [10.0, 10.5, 11.25, 12.125];
        for (got, want) in out.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_series_is_a_fixed_point() {
        let input = vec![42.5; 100];
        let out = ema(&input, 12);
        assert!(out.iter().all(|v| (v - 42.5).abs() < 1e-12));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(ema(&[], 9).is_empty());
    }

    #[test]
    fn output_matches_input_length() {
        let input: Vec<f64> = (0..37).map(|i| i as f64).collect();
        assert_eq!(ema(&input, 9).len(), input.len());
    }
}
