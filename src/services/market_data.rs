//! Market data provider interface.

use crate::models::indicators::Candle;

/// Supplies OHLCV history for one symbol over a trailing range.
///
/// Treated as unreliable per call: any error is non-fatal to the screening
/// pass and only skips the symbol being fetched.
#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Get historical candles for a symbol over a range such as "1mo",
    /// ordered oldest first.
    async fn get_candles(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>>;
}
