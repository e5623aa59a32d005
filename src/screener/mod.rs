//! Sequential watchlist screening pass.

pub mod criteria;
pub mod rate_limit;

pub use criteria::ScreeningCriteria;
pub use rate_limit::RateLimitPolicy;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::indicators::momentum::calculate_mfi_default;
use crate::indicators::trend::{average_volume, calculate_sma};
use crate::models::screening::{ScreeningHit, SkipReason, SymbolOutcome, SymbolSnapshot};
use crate::services::market_data::MarketDataProvider;

/// Minimum periods required before a symbol is evaluated at all.
pub const MIN_HISTORY: usize = 20;
/// Lookback range requested from the data source.
pub const HISTORY_RANGE: &str = "1mo";
/// Period for the close SMA and the average volume.
pub const MA_PERIOD: u32 = 20;

pub struct Screener {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    criteria: ScreeningCriteria,
    rate_limit: RateLimitPolicy,
}

impl Screener {
    pub fn new(
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        criteria: ScreeningCriteria,
        rate_limit: RateLimitPolicy,
    ) -> Self {
        Self {
            provider,
            criteria,
            rate_limit,
        }
    }

    /// Run one full pass over the watchlist, strictly in order.
    ///
    /// Each symbol is fully processed before the next fetch begins. A
    /// failing symbol is logged and carried as a `Failed` outcome; it never
    /// aborts the remainder of the pass.
    pub async fn run(&self, watchlist: &[String]) -> Vec<SymbolOutcome> {
        let mut outcomes = Vec::with_capacity(watchlist.len());

        for (i, symbol) in watchlist.iter().enumerate() {
            if i > 0 {
                self.rate_limit.pause().await;
            }

            let outcome = match self.screen_symbol(symbol).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "skipping {} after error: {}", symbol, e);
                    SymbolOutcome::Failed {
                        symbol: symbol.clone(),
                        error: e.to_string(),
                    }
                }
            };

            match &outcome {
                SymbolOutcome::Hit(hit) => {
                    info!(
                        symbol = %hit.symbol,
                        mfi = hit.mfi,
                        "{} passed all screening criteria",
                        hit.symbol
                    );
                }
                SymbolOutcome::Skipped { symbol, reason } => {
                    debug!(symbol = %symbol, reason = ?reason, "{} skipped: {:?}", symbol, reason);
                }
                SymbolOutcome::Failed { .. } => {}
            }

            outcomes.push(outcome);
        }

        let hits = outcomes.iter().filter(|o| o.is_hit()).count();
        let failed = outcomes
            .iter()
            .filter(|o| matches!(o, SymbolOutcome::Failed { .. }))
            .count();
        info!(
            symbols = watchlist.len(),
            hits = hits,
            failed = failed,
            "screening pass finished: {} symbols, {} hits, {} failed",
            watchlist.len(),
            hits,
            failed
        );

        outcomes
    }

    async fn screen_symbol(
        &self,
        symbol: &str,
    ) -> Result<SymbolOutcome, Box<dyn std::error::Error + Send + Sync>> {
        let candles = self.provider.get_candles(symbol, HISTORY_RANGE).await?;

        if candles.len() < MIN_HISTORY {
            return Ok(SymbolOutcome::Skipped {
                symbol: symbol.to_string(),
                reason: SkipReason::InsufficientHistory,
            });
        }

        let last = &candles[candles.len() - 1];
        let avg_volume = average_volume(&candles, MA_PERIOD)
            .ok_or_else(|| format!("no average volume for {}", symbol))?;
        let ma20 = calculate_sma(&candles, MA_PERIOD)
            .ok_or_else(|| format!("no moving average for {}", symbol))?
            .value;
        let mfi = calculate_mfi_default(&candles).value;

        let snapshot = SymbolSnapshot {
            last_close: last.close,
            last_volume: last.volume,
            avg_volume,
            mfi,
            ma20,
            estimated_value: self.criteria.estimated_value(last.close, last.volume),
        };

        if self.criteria.matches(&snapshot) {
            Ok(SymbolOutcome::Hit(ScreeningHit {
                symbol: symbol.to_string(),
                price: snapshot.last_close,
                mfi: snapshot.mfi,
                estimated_value: snapshot.estimated_value,
            }))
        } else {
            Ok(SymbolOutcome::Skipped {
                symbol: symbol.to_string(),
                reason: SkipReason::CriteriaNotMet,
            })
        }
    }
}

/// Hits in watchlist-relative order, ready for the reporter.
pub fn collect_hits(outcomes: &[SymbolOutcome]) -> Vec<ScreeningHit> {
    outcomes
        .iter()
        .filter_map(|o| match o {
            SymbolOutcome::Hit(hit) => Some(hit.clone()),
            _ => None,
        })
        .collect()
}
