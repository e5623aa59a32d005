//! Screening filter: a pure four-way conjunction over one symbol snapshot.

use crate::models::screening::SymbolSnapshot;

#[derive(Debug, Clone)]
pub struct ScreeningCriteria {
    /// Liquidity floor on estimated transaction value.
    pub min_transaction_value: f64,
    /// Last volume must exceed this multiple of the 20-period average.
    pub volume_spike_ratio: f64,
    /// Net accumulation threshold on the Money Flow Index.
    pub min_mfi: f64,
    /// Shares per lot, used to estimate transaction value.
    pub lot_size: f64,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            min_transaction_value: 1_000_000_000.0,
            volume_spike_ratio: 1.5,
            min_mfi: 50.0,
            lot_size: 100.0,
        }
    }
}

impl ScreeningCriteria {
    /// Estimated transaction value: close x volume x lot size, exact
    /// arithmetic with no rounding before comparison.
    pub fn estimated_value(&self, last_close: f64, last_volume: f64) -> f64 {
        last_close * last_volume * self.lot_size
    }

    /// All four criteria must hold simultaneously:
    /// liquidity floor, volume spike, MFI accumulation, close above MA20.
    pub fn matches(&self, snapshot: &SymbolSnapshot) -> bool {
        snapshot.estimated_value > self.min_transaction_value
            && snapshot.last_volume > self.volume_spike_ratio * snapshot.avg_volume
            && snapshot.mfi > self.min_mfi
            && snapshot.last_close > snapshot.ma20
    }
}
