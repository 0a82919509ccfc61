//! A validated collection of time-series bars for one symbol.

use thiserror::Error;

use crate::models::{bar::Bar, interval::Interval};

/// Why a fetched bar sequence was rejected at construction.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// A bar contained a NaN, infinite, or negative field.
    #[error("Bar {index} for '{symbol}' has a non-finite or negative field")]
    MalformedBar { symbol: String, index: usize },

    /// Two consecutive bars share the same timestamp.
    #[error("Bar {index} for '{symbol}' duplicates the previous timestamp")]
    DuplicateTimestamp { symbol: String, index: usize },

    /// Timestamps are not in ascending order.
    #[error("Bar {index} for '{symbol}' is out of order")]
    OutOfOrder { symbol: String, index: usize },
}

/// An ordered set of OHLCV bars for a single symbol and interval.
///
/// Construction enforces the series invariants: every bar well-formed,
/// timestamps strictly ascending (no duplicates). Once built, the series
/// is never mutated; each polling cycle replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "BTCUSDT").
    pub symbol: String,
    /// The time interval of each bar in the series.
    pub interval: Interval,
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(symbol: String, interval: Interval, bars: Vec<Bar>) -> Result<Self, SeriesError> {
        for (index, bar) in bars.iter().enumerate() {
            if !bar.is_well_formed() {
                return Err(SeriesError::MalformedBar {
                    symbol,
                    index,
                });
            }
            if index > 0 {
                let prev = bars[index - 1].timestamp;
                if bar.timestamp == prev {
                    return Err(SeriesError::DuplicateTimestamp { symbol, index });
                }
                if bar.timestamp < prev {
                    return Err(SeriesError::OutOfOrder { symbol, index });
                }
            }
        }
        Ok(Self {
            symbol,
            interval,
            bars,
        })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
