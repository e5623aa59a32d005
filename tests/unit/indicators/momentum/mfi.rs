//! Unit tests for the Money Flow Index

use chrono::Utc;
use sentinel::indicators::momentum::{calculate_mfi, calculate_mfi_default};
use sentinel::models::indicators::Candle;

/// Build candles whose typical price tracks `closes` exactly.
fn candles_from_closes(closes: &[f64], volume: f64) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 1.0, close - 1.0, close, volume, Utc::now()))
        .collect()
}

#[test]
fn short_series_returns_neutral_fifty() {
    // Anything below window + 1 periods is neutral, never an error.
    for len in 0..15 {
        let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
        let candles = candles_from_closes(&closes, 1000.0);
        assert_eq!(calculate_mfi_default(&candles).value, 50.0, "len {}", len);
    }
}

#[test]
fn all_positive_deltas_saturate_at_hundred() {
    // Zero negative flow: the ratio goes infinite and MFI lands on 100.
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes, 1000.0);
    assert_eq!(calculate_mfi_default(&candles).value, 100.0);
}

#[test]
fn all_negative_deltas_floor_at_zero() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
    let candles = candles_from_closes(&closes, 1000.0);
    assert_eq!(calculate_mfi_default(&candles).value, 0.0);
}

#[test]
fn mixed_series_stays_inside_the_band() {
    let closes: Vec<f64> = (0..30)
        .map(|i| {
            let swing = (i % 5) as f64;
            if i % 2 == 0 {
                100.0 + 2.0 * swing
            } else {
                100.0 - swing
            }
        })
        .collect();
    let candles = candles_from_closes(&closes, 1000.0);
    let mfi = calculate_mfi_default(&candles).value;
    assert!(mfi > 0.0 && mfi < 100.0, "mfi = {}", mfi);
}

#[test]
fn flat_series_never_screens_as_accumulation() {
    // No flow on either side: 0/0 propagates as NaN, which fails any
    // greater-than comparison downstream.
    let closes = vec![100.0; 20];
    let candles = candles_from_closes(&closes, 1000.0);
    let mfi = calculate_mfi_default(&candles).value;
    assert!(!(mfi > 50.0));
}

#[test]
fn custom_window_uses_exactly_the_trailing_periods() {
    // 5 rising periods after a falling prefix; window 4 sees only gains.
    let closes = vec![110.0, 108.0, 106.0, 100.0, 101.0, 102.0, 103.0, 104.0];
    let candles = candles_from_closes(&closes, 1000.0);
    assert_eq!(calculate_mfi(&candles, 4).value, 100.0);
}

#[test]
fn volume_weights_the_flow() {
    // One heavy down period against light up periods drags MFI below 50.
    let mut candles = candles_from_closes(
        &[
            100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 107.0, 108.0, 109.0, 110.0, 111.0,
            112.0, 113.0, 112.0,
        ],
        100.0,
    );
    candles.last_mut().unwrap().volume = 1_000_000.0;
    let mfi = calculate_mfi_default(&candles).value;
    assert!(mfi < 50.0, "mfi = {}", mfi);
}
