//! Binance-style REST provider for spot kline data.
//!
//! Klines and exchange metadata are public endpoints; an API key only
//! raises the request-weight allowance, so it is optional here and read
//! from the environment rather than from config.

pub mod response;

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use shared_utils::env::get_optional_env_var;
use snafu::ResultExt;

use crate::models::{request::BarsRequest, series::BarSeries};
use crate::providers::{
    ApiSnafu, ClientBuildSnafu, DataProvider, DecodeSnafu, InvalidApiKeySnafu,
    MalformedSeriesSnafu, ProviderError, ProviderInitError, RequestSnafu,
};
use self::response::{ExchangeInfo, RawKline};

/// Environment variable holding the optional API key.
const API_KEY_ENV: &str = "BINANCE_API_KEY";

/// Connection settings for [`BinanceProvider`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BinanceConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub base_url: String,
    /// Client-side request budget; requests above it queue locally.
    pub requests_per_second: u32,
    /// Per-request timeout applied to the HTTP client.
    pub timeout_secs: u64,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.binance.com".to_string(),
            requests_per_second: 5,
            timeout_secs: 10,
        }
    }
}

pub struct BinanceProvider {
    client: Client,
    base_url: String,
    limiter: DefaultDirectRateLimiter,
}

impl BinanceProvider {
    /// Creates a new provider.
    ///
    /// Reads the optional API key from the `BINANCE_API_KEY` environment
    /// variable and attaches it as a default header when present.
    pub fn new(config: BinanceConfig) -> Result<Self, ProviderInitError> {
        let api_key = get_optional_env_var(API_KEY_ENV).map(|k| SecretString::new(k.into()));

        let mut headers = header::HeaderMap::new();
        if let Some(key) = &api_key {
            headers.insert(
                "X-MBX-APIKEY",
                header::HeaderValue::from_str(key.expose_secret())
                    .context(InvalidApiKeySnafu)?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context(ClientBuildSnafu)?;

        let per_second =
            NonZeroU32::new(config.requests_per_second).unwrap_or(nonzero!(1u32));
        let limiter = RateLimiter::direct(Quota::per_second(per_second));

        Ok(Self {
            client,
            base_url: config.base_url,
            limiter,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        self.limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .context(RequestSnafu)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return ApiSnafu {
                message: format!("{status}: {body}"),
            }
            .fail();
        }

        response.json::<T>().await.context(RequestSnafu)
    }
}

#[async_trait]
impl DataProvider for BinanceProvider {
    async fn fetch_bars(&self, request: BarsRequest) -> Result<BarSeries, ProviderError> {
        let query = [
            ("symbol", request.symbol.clone()),
            ("interval", request.interval.as_str().to_string()),
            ("limit", request.limit.to_string()),
        ];
        let raw: Vec<RawKline> = self.get_json("/api/v3/klines", &query).await?;

        tracing::debug!(
            symbol = %request.symbol,
            bars = raw.len(),
            "fetched klines"
        );

        let mut bars = Vec::with_capacity(raw.len());
        for kline in raw {
            let bar = kline
                .into_bar()
                .map_err(|message| DecodeSnafu { message }.build())?;
            bars.push(bar);
        }

        BarSeries::new(request.symbol, request.interval, bars).context(MalformedSeriesSnafu)
    }

    async fn list_symbols(&self, quote_asset: &str) -> Result<Vec<String>, ProviderError> {
        let info: ExchangeInfo = self.get_json("/api/v3/exchangeInfo", &[]).await?;
        let symbols = info
            .symbols
            .into_iter()
            .filter(|s| s.status == "TRADING" && s.quote_asset == quote_asset)
            .map(|s| s.symbol)
            .collect();
        Ok(symbols)
    }
}
