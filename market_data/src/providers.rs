//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, a unified interface for
//! fetching time-series bar data from any market data vendor. Concrete
//! implementations (such as [`binance_rest::BinanceProvider`]) handle
//! vendor-specific API logic and validation.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) for runtime selection of providers.

pub mod binance_rest;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{request::BarsRequest, series::BarSeries, series::SeriesError};

/// Trait for fetching time-series bar data from a market data provider.
///
/// An empty [`BarSeries`] is a valid result ("no data for this symbol");
/// callers decide whether that means skip or error.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches the most recent bars for one symbol.
    async fn fetch_bars(&self, request: BarsRequest) -> Result<BarSeries, ProviderError>;

    /// Lists the actively traded symbols quoted in `quote_asset`.
    async fn list_symbols(&self, quote_asset: &str) -> Result<Vec<String>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// Failed to init the reqwest client.
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// API key contains invalid characters.
    #[snafu(display("Invalid API key format: {source}"))]
    InvalidApiKey {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Request {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned a non-success response.
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The response body could not be decoded into bars.
    #[snafu(display("Failed to decode provider response: {message}"))]
    Decode {
        message: String,
        backtrace: Backtrace,
    },

    /// The decoded bars violate the series invariants.
    #[snafu(display("Provider returned a malformed series: {source}"))]
    MalformedSeries {
        source: SeriesError,
        backtrace: Backtrace,
    },

    /// An error during provider configuration or initialization.
    #[snafu(display("Provider initialization error: {source}"))]
    Init {
        #[snafu(backtrace)]
        source: ProviderInitError,
    },
}
