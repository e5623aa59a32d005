//! MFI (Money Flow Index) indicator
//!
//! Volume-weighted momentum oscillator in [0, 100].

use crate::models::indicators::{Candle, MfiIndicator};

pub const DEFAULT_MFI_WINDOW: u32 = 14;

/// Calculate MFI for the most recent period.
///
/// MFI = 100 - (100 / (1 + money ratio))
/// money ratio = positive flow sum / negative flow sum over the window
///
/// A series shorter than `window + 1` periods yields a neutral 50 instead
/// of an error. A zero negative-flow sum is left to float division: the
/// ratio becomes infinite and MFI lands on exactly 100.
pub fn calculate_mfi(candles: &[Candle], window: u32) -> MfiIndicator {
    let window = window as usize;
    if candles.len() < window + 1 {
        return MfiIndicator {
            value: 50.0,
            period: Some(window as u32),
        };
    }

    let mut positive_flow = 0.0;
    let mut negative_flow = 0.0;

    // The current period's raw flow is assigned by the sign of its
    // typical-price delta; a flat delta counts toward neither side.
    for i in (candles.len() - window)..candles.len() {
        let tp = candles[i].typical_price();
        let delta = tp - candles[i - 1].typical_price();
        let raw_flow = tp * candles[i].volume;

        if delta > 0.0 {
            positive_flow += raw_flow;
        } else if delta < 0.0 {
            negative_flow += raw_flow;
        }
    }

    let money_ratio = positive_flow / negative_flow;
    let mfi = 100.0 - (100.0 / (1.0 + money_ratio));

    MfiIndicator {
        value: mfi,
        period: Some(window as u32),
    }
}

/// Calculate MFI with the default 14-period window.
pub fn calculate_mfi_default(candles: &[Candle]) -> MfiIndicator {
    calculate_mfi(candles, DEFAULT_MFI_WINDOW)
}
