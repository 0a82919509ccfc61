use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use market_data::providers::DataProvider;
use market_data::providers::binance_rest::BinanceProvider;
use signal_scanner::config::ScannerConfig;
use signal_scanner::cycle::run_cycle;
use signal_scanner::notify::{Notifier, StdoutNotifier, TelegramNotifier};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the scanner config file
    #[arg(short, long, default_value = "configs/scanner.toml")]
    config: String,

    /// Comma-separated symbol list overriding the configured universe
    #[arg(long)]
    symbols: Option<String>,

    /// Print notifications to stdout instead of delivering them
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single scan cycle and exit
    Scan,
    /// Run scan cycles forever, pausing between them
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = ScannerConfig::load(&cli.config)
        .with_context(|| format!("loading config from '{}'", cli.config))?;
    if let Some(symbols) = &cli.symbols {
        config.universe.symbols = symbols
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
    }

    let provider: Arc<dyn DataProvider> = Arc::new(
        BinanceProvider::new(config.provider.clone()).context("initializing market data provider")?,
    );

    let notifier: Arc<dyn Notifier> = if cli.dry_run {
        Arc::new(StdoutNotifier)
    } else {
        let timeout = Duration::from_secs(config.notify.timeout_secs.unwrap_or(10));
        Arc::new(
            TelegramNotifier::new(config.notify.chat_id.clone(), timeout)
                .context("initializing Telegram notifier")?,
        )
    };

    let pause = Duration::from_secs(config.cycle.pause_secs);
    let config = Arc::new(config);

    match cli.command {
        Commands::Scan => {
            let summary = run_cycle(provider, notifier, config).await;
            println!("{summary}");
        }
        Commands::Watch => loop {
            let summary = run_cycle(
                Arc::clone(&provider),
                Arc::clone(&notifier),
                Arc::clone(&config),
            )
            .await;
            println!("{summary}");
            tokio::time::sleep(pause).await;
        },
    }

    Ok(())
}
