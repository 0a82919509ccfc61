//! Simple moving average.

/// Arithmetic mean over a trailing window of `period` elements.
///
/// Indices with fewer than `period` observations behind them (inclusive)
/// are `None`. A `period` of 0 yields all `None`; config validation
/// rejects it upstream.
pub fn sma(series: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; series.len()];
    if period == 0 || series.len() < period {
        return out;
    }
    let mut window_sum: f64 = series[..period].iter().sum();
    out[period - 1] = Some(window_sum / period as f64);
    for i in period..series.len() {
        window_sum += series[i] - series[i - period];
        out[i] = Some(window_sum / period as f64);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_up_region_is_undefined() {
        let out = sma(&[1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert_eq!(out[2], Some(2.0));
        assert_eq!(out[3], Some(3.0));
    }

    #[test]
    fn window_of_one_is_identity() {
        let out = sma(&[5.0, 7.0], 1);
        assert_eq!(out, vec![Some(5.0), Some(7.0)]);
    }

    #[test]
    fn short_series_is_all_undefined() {
        let out = sma(&[1.0, 2.0], 5);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn rolling_sum_stays_accurate() {
        let input: Vec<f64> = (1..=50).map(|i| i as f64).collect();
        let out = sma(&input, 10);
        // mean of 41..=50
        assert!((out[49].unwrap() - 45.5).abs() < 1e-9);
    }
}
