//! Immutable run configuration.
//!
//! Everything the screener and reporter need is resolved here once at
//! startup and passed in by value; nothing reads the process environment
//! after construction.

use std::env;
use std::time::Duration;

use crate::screener::criteria::ScreeningCriteria;
use crate::screener::rate_limit::RateLimitPolicy;

/// Default watchlist: IDX bluechips, actively traded names, and small caps.
pub const DEFAULT_WATCHLIST: &[&str] = &[
    "BBCA.JK", "BBRI.JK", "BMRI.JK", "BBNI.JK", "TLKM.JK", "ASII.JK", "UNTR.JK",
    "ADRO.JK", "ITMG.JK", "PTBA.JK", "MEDC.JK", "ENRG.JK", "MBMA.JK", "NCKL.JK",
    "TINS.JK", "ANTM.JK", "GOTO.JK", "BUKA.JK", "EMTK.JK", "BELI.JK", "UNVR.JK",
    "ICBP.JK", "AMRT.JK", "BREN.JK", "TPIA.JK", "BRPT.JK", "AMMN.JK", "JSMR.JK",
    "PGE.JK", "BRIS.JK", "ARTO.JK", "BBYB.JK", "KPIG.JK", "MSIN.JK", "FILM.JK",
    "SMLE.JK", "DOOH.JK", "BDKR.JK", "STRK.JK", "CUAN.JK", "CHIP.JK", "WIDI.JK",
    "PTPS.JK", "BSDE.JK", "PWON.JK", "CTRA.JK", "PTPP.JK", "ADHI.JK", "PANI.JK",
];

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
    /// Overridable for tests; defaults to the public Bot API host.
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub watchlist: Vec<String>,
    pub criteria: ScreeningCriteria,
    pub rate_limit: RateLimitPolicy,
    pub telegram: TelegramConfig,
}

impl Config {
    /// Build the run configuration from defaults plus process environment.
    ///
    /// Missing Telegram credentials are not an error here; they surface as
    /// a logged send failure at report time.
    pub fn from_env() -> Self {
        Self {
            watchlist: DEFAULT_WATCHLIST.iter().map(|s| s.to_string()).collect(),
            criteria: ScreeningCriteria::default(),
            rate_limit: RateLimitPolicy::FixedDelay(Duration::from_millis(500)),
            telegram: TelegramConfig {
                token: env::var("TELEGRAM_TOKEN").unwrap_or_default(),
                chat_id: env::var("CHAT_ID").unwrap_or_default(),
                api_base: "https://api.telegram.org".to_string(),
            },
        }
    }
}

/// Get the current environment name (defaults to "development").
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}
