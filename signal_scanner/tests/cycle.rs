//! Cycle orchestration against mock provider and notifier.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use market_data::models::{bar::Bar, request::BarsRequest, series::BarSeries};
use market_data::providers::{ApiSnafu, DataProvider, ProviderError};
use signal_scanner::config::ScannerConfig;
use signal_scanner::cycle::run_cycle;
use signal_scanner::notify::{Notifier, NotifyError};

fn flat_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| Bar {
            timestamp: Utc
                .timestamp_opt(1_700_000_000 + i as i64 * 900, 0)
                .unwrap(),
            open: 100.0,
            high: 100.5,
            low: 99.5,
            close: 100.0,
            volume: 50.0,
        })
        .collect()
}

/// Constant price with a final small-bodied green candle at 5x volume:
/// classifies as a whale buy under default rules.
fn whale_buy_bars() -> Vec<Bar> {
    let mut bars = flat_bars(60);
    let last = bars.last_mut().unwrap();
    last.close = 101.0;
    last.high = 101.5;
    last.volume = 250.0;
    bars
}

#[derive(Default)]
struct MockProvider {
    series: HashMap<String, Vec<Bar>>,
    failing: Vec<String>,
    listing: Option<Vec<String>>,
}

#[async_trait]
impl DataProvider for MockProvider {
    async fn fetch_bars(&self, request: BarsRequest) -> Result<BarSeries, ProviderError> {
        if self.failing.contains(&request.symbol) {
            return ApiSnafu {
                message: "503 from venue",
            }
            .fail();
        }
        let bars = self.series.get(&request.symbol).cloned().unwrap_or_default();
        Ok(BarSeries::new(request.symbol, request.interval, bars).unwrap())
    }

    async fn list_symbols(&self, _quote_asset: &str) -> Result<Vec<String>, ProviderError> {
        match &self.listing {
            Some(listing) => Ok(listing.clone()),
            None => ApiSnafu {
                message: "listing unavailable",
            }
            .fail(),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    failing: bool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        if self.failing {
            return Err(NotifyError::Api("chat not found".to_string()));
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn config_for(symbols: &[&str]) -> Arc<ScannerConfig> {
    let mut config = ScannerConfig::default();
    config.universe.symbols = symbols.iter().map(|s| s.to_string()).collect();
    Arc::new(config)
}

#[tokio::test]
async fn cycle_isolates_per_symbol_failures() {
    let mut provider = MockProvider::default();
    provider.series.insert("WHALE".into(), whale_buy_bars());
    provider.series.insert("FLAT".into(), flat_bars(60));
    provider.series.insert("SHORT".into(), flat_bars(10));
    provider.failing.push("BROKEN".into());

    let notifier = Arc::new(RecordingNotifier::default());
    let summary = run_cycle(
        Arc::new(provider),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        config_for(&["WHALE", "FLAT", "SHORT", "BROKEN"]),
    )
    .await;

    assert_eq!(summary.scanned, 2);
    assert_eq!(summary.buys, 1);
    assert_eq!(summary.sells, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failures, 1);
    assert_eq!(summary.notify_failures, 0);

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("BUY signal - WHALE (15m) [whale]"));
}

#[tokio::test]
async fn notify_failure_is_counted_but_not_fatal() {
    let mut provider = MockProvider::default();
    provider.series.insert("WHALE".into(), whale_buy_bars());
    provider.series.insert("FLAT".into(), flat_bars(60));

    let notifier = Arc::new(RecordingNotifier {
        failing: true,
        ..RecordingNotifier::default()
    });
    let summary = run_cycle(
        Arc::new(provider),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        config_for(&["WHALE", "FLAT"]),
    )
    .await;

    assert_eq!(summary.buys, 1);
    assert_eq!(summary.notify_failures, 1);
    assert_eq!(summary.scanned, 2);
}

#[tokio::test]
async fn empty_fetch_result_is_a_skip_not_an_error() {
    let provider = MockProvider::default(); // knows no symbols: empty series
    let notifier = Arc::new(RecordingNotifier::default());
    let summary = run_cycle(
        Arc::new(provider),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        config_for(&["UNKNOWN"]),
    )
    .await;

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failures, 0);
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn dynamic_universe_failure_ends_cycle_with_one_failure() {
    let provider = MockProvider::default(); // listing: None -> error
    let notifier = Arc::new(RecordingNotifier::default());
    let summary = run_cycle(
        Arc::new(provider),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        config_for(&[]),
    )
    .await;

    assert_eq!(summary.failures, 1);
    assert_eq!(summary.scanned, 0);
}

#[tokio::test]
async fn dynamic_universe_listing_is_scanned() {
    let mut provider = MockProvider::default();
    provider.series.insert("WHALE".into(), whale_buy_bars());
    provider.listing = Some(vec!["WHALE".into()]);

    let notifier = Arc::new(RecordingNotifier::default());
    let mut config = ScannerConfig::default();
    config.cycle.concurrency = 1;
    let summary = run_cycle(
        Arc::new(provider),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Arc::new(config),
    )
    .await;

    assert_eq!(summary.buys, 1);
    assert_eq!(notifier.sent.lock().unwrap().len(), 1);
}
