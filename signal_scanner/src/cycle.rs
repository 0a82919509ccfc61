//! One scan cycle over the symbol universe.
//!
//! Symbols are evaluated concurrently up to `cycle.concurrency` permits.
//! Every per-symbol failure (fetch, decode, notify) is logged and
//! isolated; the cycle always runs to completion and reports a summary.

use std::fmt;
use std::sync::Arc;

use market_data::models::request::BarsRequest;
use market_data::providers::DataProvider;
use signal_engine::{Direction, EnrichedSeries, Verdict, classify};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::config::ScannerConfig;
use crate::message::format_signal;
use crate::notify::Notifier;

/// Counts reported at the end of every cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleSummary {
    /// Symbols for which evaluation ran to a verdict.
    pub scanned: usize,
    pub buys: usize,
    pub sells: usize,
    /// Symbols with less history than the engine floor (includes empty
    /// "no data" responses).
    pub skipped: usize,
    /// Symbols whose fetch failed.
    pub failures: usize,
    /// Signals found but not delivered.
    pub notify_failures: usize,
}

impl fmt::Display for CycleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scanned {} symbols: {} buy, {} sell, {} skipped, {} failed, {} undelivered",
            self.scanned, self.buys, self.sells, self.skipped, self.failures, self.notify_failures
        )
    }
}

enum SymbolOutcome {
    Signal {
        direction: Direction,
        delivered: bool,
    },
    NoSignal,
    Skipped,
    FetchFailed,
}

/// Runs one full cycle and returns its summary.
///
/// A failure to resolve the dynamic universe is the only whole-cycle
/// failure mode; it is reported as a single failure with nothing scanned.
pub async fn run_cycle(
    provider: Arc<dyn DataProvider>,
    notifier: Arc<dyn Notifier>,
    config: Arc<ScannerConfig>,
) -> CycleSummary {
    let symbols = if config.universe.symbols.is_empty() {
        match provider.list_symbols(&config.universe.quote_asset).await {
            Ok(symbols) => symbols,
            Err(error) => {
                warn!(%error, "failed to list active symbols");
                return CycleSummary {
                    failures: 1,
                    ..CycleSummary::default()
                };
            }
        }
    } else {
        config.universe.symbols.clone()
    };

    info!(symbols = symbols.len(), interval = %config.cycle.interval, "starting cycle");

    let permits = Arc::new(Semaphore::new(config.cycle.concurrency));
    let mut tasks = JoinSet::new();
    for symbol in symbols {
        let provider = Arc::clone(&provider);
        let notifier = Arc::clone(&notifier);
        let config = Arc::clone(&config);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            // The semaphore is never closed while tasks run.
            let Ok(_permit) = permits.acquire().await else {
                return SymbolOutcome::Skipped;
            };
            evaluate_symbol(&*provider, &*notifier, &config, symbol).await
        });
    }

    let mut summary = CycleSummary::default();
    while let Some(joined) = tasks.join_next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, "symbol evaluation task panicked");
                summary.failures += 1;
                continue;
            }
        };
        match outcome {
            SymbolOutcome::Signal {
                direction,
                delivered,
            } => {
                summary.scanned += 1;
                match direction {
                    Direction::Buy => summary.buys += 1,
                    Direction::Sell => summary.sells += 1,
                }
                if !delivered {
                    summary.notify_failures += 1;
                }
            }
            SymbolOutcome::NoSignal => summary.scanned += 1,
            SymbolOutcome::Skipped => summary.skipped += 1,
            SymbolOutcome::FetchFailed => summary.failures += 1,
        }
    }

    info!(%summary, "cycle complete");
    summary
}

async fn evaluate_symbol(
    provider: &dyn DataProvider,
    notifier: &dyn Notifier,
    config: &ScannerConfig,
    symbol: String,
) -> SymbolOutcome {
    let request = BarsRequest {
        symbol: symbol.clone(),
        interval: config.cycle.interval,
        limit: config.cycle.bar_count,
    };

    let series = match provider.fetch_bars(request).await {
        Ok(series) => series,
        Err(error) => {
            warn!(%symbol, %error, "fetch failed");
            return SymbolOutcome::FetchFailed;
        }
    };

    let enriched = EnrichedSeries::from_bars(series.bars(), &config.engine.indicators);
    match classify(&enriched, &config.engine.rules) {
        Verdict::InsufficientData => {
            debug!(%symbol, bars = series.len(), "not enough history, skipping");
            SymbolOutcome::Skipped
        }
        Verdict::NoSignal { volume_explosion } => {
            if volume_explosion {
                info!(%symbol, "volume explosion without directional signal");
            }
            SymbolOutcome::NoSignal
        }
        Verdict::Signal {
            classification,
            volume_explosion,
        } => {
            info!(
                %symbol,
                direction = ?classification.direction,
                reason = ?classification.reason,
                "signal"
            );
            let text = format_signal(
                &symbol,
                config.cycle.interval,
                &classification,
                volume_explosion,
            );
            let delivered = match notifier.send(&text).await {
                Ok(()) => true,
                Err(error) => {
                    warn!(%symbol, %error, "notification failed");
                    false
                }
            };
            SymbolOutcome::Signal {
                direction: classification.direction,
                delivered,
            }
        }
    }
}
