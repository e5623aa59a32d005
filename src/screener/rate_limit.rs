//! Inter-request pacing toward the market data source.
//!
//! Kept as an explicit policy value so batching or backoff could replace
//! the fixed delay without touching the screening loop.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitPolicy {
    /// No pause between fetches (tests).
    None,
    /// Fixed, non-adaptive pause between consecutive fetches.
    FixedDelay(Duration),
}

impl RateLimitPolicy {
    pub async fn pause(&self) {
        match self {
            RateLimitPolicy::None => {}
            RateLimitPolicy::FixedDelay(delay) => tokio::time::sleep(*delay).await,
        }
    }
}
