//! Canonical in-memory representation of a time-series bar (OHLCV).
//!
//! This struct is the standard output of all
//! [`DataProvider`](crate::providers::DataProvider) implementations,
//! regardless of venue.

use chrono::{DateTime, Utc};

/// A single time-series bar (OHLCV) for a given timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// The open timestamp of this bar (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume traded during the bar interval.
    pub volume: f64,
}

impl Bar {
    /// True when every field is a finite, non-negative number.
    ///
    /// Series construction rejects bars that fail this check so that
    /// downstream indicator math never sees NaN or infinite inputs.
    pub fn is_well_formed(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// True when the bar closed above its open (green candle).
    pub fn is_green(&self) -> bool {
        self.close > self.open
    }

    /// True when the bar closed below its open (red candle).
    pub fn is_red(&self) -> bool {
        self.close < self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bar(open: f64, close: f64) -> Bar {
        Bar {
            timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: 100.0,
        }
    }

    #[test]
    fn candle_color() {
        assert!(bar(10.0, 11.0).is_green());
        assert!(bar(11.0, 10.0).is_red());
        let flat = bar(10.0, 10.0);
        assert!(!flat.is_green() && !flat.is_red());
    }

    #[test]
    fn nan_close_is_rejected() {
        let mut b = bar(10.0, 11.0);
        b.close = f64::NAN;
        assert!(!b.is_well_formed());
    }

    #[test]
    fn negative_volume_is_rejected() {
        let mut b = bar(10.0, 11.0);
        b.volume = -1.0;
        assert!(!b.is_well_formed());
    }
}
