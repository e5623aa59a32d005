use serde::{Deserialize, Serialize};

/// Derived scalars for the most recent period of one symbol's series.
///
/// Computed fresh per symbol per run and discarded after the filter pass.
#[derive(Debug, Clone)]
pub struct SymbolSnapshot {
    pub last_close: f64,
    pub last_volume: f64,
    pub avg_volume: f64,
    pub mfi: f64,
    pub ma20: f64,
    /// Estimated transaction value: close x volume x lot size, exact
    /// arithmetic before any threshold comparison.
    pub estimated_value: f64,
}

/// A symbol that passed every screening criterion in this run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningHit {
    pub symbol: String,
    pub price: f64,
    pub mfi: f64,
    pub estimated_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Fewer than the minimum number of periods returned by the data source.
    InsufficientHistory,
    /// Snapshot computed but at least one criterion failed.
    CriteriaNotMet,
}

/// Per-symbol result of one screening pass.
///
/// Fetch and computation failures are carried as data instead of aborting
/// the pass; the aggregation step filters hits out afterwards.
#[derive(Debug, Clone)]
pub enum SymbolOutcome {
    Hit(ScreeningHit),
    Skipped { symbol: String, reason: SkipReason },
    Failed { symbol: String, error: String },
}

impl SymbolOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            SymbolOutcome::Hit(hit) => &hit.symbol,
            SymbolOutcome::Skipped { symbol, .. } => symbol,
            SymbolOutcome::Failed { symbol, .. } => symbol,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, SymbolOutcome::Hit(_))
    }
}
