//! Market-data ingestion: canonical OHLCV models and async providers.
//!
//! The [`providers::DataProvider`] trait abstracts over concrete exchange
//! APIs; [`providers::binance_rest::BinanceProvider`] is the default
//! implementation. All providers return the vendor-agnostic
//! [`models::series::BarSeries`].

pub mod models;
pub mod providers;
