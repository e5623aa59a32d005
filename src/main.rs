//! Sentinel screener entrypoint.
//!
//! One sequential pass over the watchlist per invocation, then exactly one
//! Telegram summary. Exits 0 regardless of per-symbol failures or an empty
//! result.

use std::sync::Arc;

use dotenvy::dotenv;
use sentinel::config::Config;
use sentinel::logging;
use sentinel::report::Reporter;
use sentinel::screener::{collect_hits, Screener};
use sentinel::services::telegram::TelegramNotifier;
use sentinel::services::yahoo::YahooFinanceProvider;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    info!(
        symbols = config.watchlist.len(),
        "starting screening pass over {} symbols",
        config.watchlist.len()
    );

    let provider = Arc::new(YahooFinanceProvider::new());
    let screener = Screener::new(provider, config.criteria.clone(), config.rate_limit);

    let outcomes = screener.run(&config.watchlist).await;
    let hits = collect_hits(&outcomes);

    let reporter = Reporter::new(Arc::new(TelegramNotifier::new(config.telegram.clone())));
    reporter.report(&hits).await;
}
