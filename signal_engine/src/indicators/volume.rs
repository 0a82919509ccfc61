//! Rolling volume baseline.

use super::sma::sma;

/// SMA over volume, used as the spike/explosion baseline column.
pub fn volume_average(volumes: &[f64], window: usize) -> Vec<Option<f64>> {
    sma(volumes, window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_with_sma_semantics() {
        let out = volume_average(&[10.0, 20.0, 30.0], 2);
        assert_eq!(out, vec![None, Some(15.0), Some(25.0)]);
    }
}
