//! Yahoo Finance chart API market data provider.

use chrono::DateTime;
use serde::Deserialize;
use tracing::debug;

use crate::models::indicators::Candle;
use crate::services::market_data::MarketDataProvider;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; sentinel-screener)";

pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host (used by tests to target a
    /// mock server).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

/// Quote arrays are index-aligned with `timestamp` and null-padded on
/// non-trading periods.
#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl ChartResult {
    fn into_candles(self) -> Vec<Candle> {
        let Some(quote) = self.indicators.quote.into_iter().next() else {
            return Vec::new();
        };

        let mut candles = Vec::with_capacity(self.timestamp.len());
        for (i, &ts) in self.timestamp.iter().enumerate() {
            let fields = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
                quote.volume.get(i).copied().flatten(),
                DateTime::from_timestamp(ts, 0),
            );
            // Null-padded periods (holidays, halted sessions) are dropped.
            if let (Some(open), Some(high), Some(low), Some(close), Some(volume), Some(timestamp)) =
                fields
            {
                candles.push(Candle::new(open, high, low, close, volume, timestamp));
            }
        }
        candles
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);

        let response = self
            .client
            .get(&url)
            .query(&[("range", range), ("interval", "1d")])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?;

        let body: ChartResponse = response.json().await?;

        if let Some(error) = body.chart.error {
            return Err(format!("chart API error for {}: {}", symbol, error).into());
        }

        let result = body
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| format!("empty chart result for {}", symbol))?;

        let candles = result.into_candles();
        debug!(
            symbol = %symbol,
            count = candles.len(),
            "fetched {} candles for {}",
            candles.len(),
            symbol
        );
        Ok(candles)
    }
}
