//! Sentinel - daily money flow screener
//!
//! Screens a fixed equity watchlist once per run: fetches ~1 month of daily
//! OHLCV data per symbol, computes the Money Flow Index plus volume/trend
//! heuristics, and pushes a single Telegram summary of the symbols that
//! passed every criterion.

pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod screener;
pub mod services;
