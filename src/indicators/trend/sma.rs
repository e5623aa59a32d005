//! SMA (Simple Moving Average) indicator

use crate::models::indicators::{Candle, SmaIndicator};

/// Calculate the SMA of close over the trailing `period` candles.
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<SmaIndicator> {
    if candles.len() < period as usize {
        return None;
    }

    let sum: f64 = candles
        .iter()
        .rev()
        .take(period as usize)
        .map(|c| c.close)
        .sum();

    Some(SmaIndicator {
        value: sum / period as f64,
        period,
    })
}

/// Average volume over the trailing `period` candles.
pub fn average_volume(candles: &[Candle], period: u32) -> Option<f64> {
    if candles.len() < period as usize {
        return None;
    }

    let sum: f64 = candles
        .iter()
        .rev()
        .take(period as usize)
        .map(|c| c.volume)
        .sum();

    Some(sum / period as f64)
}
