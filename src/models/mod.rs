//! Shared data models spanning the screener layers.

pub mod indicators;
pub mod screening;

pub use indicators::{Candle, MfiIndicator, SmaIndicator};
pub use screening::{ScreeningHit, SkipReason, SymbolOutcome, SymbolSnapshot};
