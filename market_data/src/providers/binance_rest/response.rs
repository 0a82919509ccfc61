//! Wire types for the Binance-style REST endpoints.

use chrono::DateTime;
use serde::Deserialize;

use crate::models::bar::Bar;

/// One kline as returned by `/api/v3/klines`: a heterogeneous JSON array
/// of `[open_time, open, high, low, close, volume, close_time,
/// quote_volume, trades, taker_base, taker_quote, ignore]` where prices
/// and volumes arrive as decimal strings.
#[derive(Debug, Deserialize)]
pub struct RawKline(
    pub i64,    // open time (ms)
    pub String, // open
    pub String, // high
    pub String, // low
    pub String, // close
    pub String, // volume
    pub i64,    // close time (ms)
    pub String, // quote asset volume
    pub u64,    // number of trades
    pub String, // taker buy base volume
    pub String, // taker buy quote volume
    pub String, // unused field
);

impl RawKline {
    /// Decodes the string-encoded fields into a [`Bar`].
    pub fn into_bar(self) -> Result<Bar, String> {
        let timestamp = DateTime::from_timestamp_millis(self.0)
            .ok_or_else(|| format!("open time {} out of range", self.0))?;
        Ok(Bar {
            timestamp,
            open: parse_decimal("open", &self.1)?,
            high: parse_decimal("high", &self.2)?,
            low: parse_decimal("low", &self.3)?,
            close: parse_decimal("close", &self.4)?,
            volume: parse_decimal("volume", &self.5)?,
        })
    }
}

fn parse_decimal(field: &str, raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("{field} value '{raw}' is not a number"))
}

/// Subset of `/api/v3/exchangeInfo` needed to enumerate the universe.
#[derive(Debug, Deserialize)]
pub struct ExchangeInfo {
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
    pub quote_asset: String,
}
