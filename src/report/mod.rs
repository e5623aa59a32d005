//! Run summary formatting and single-message dispatch.

use std::sync::Arc;

use tracing::{error, info};

use crate::models::screening::ScreeningHit;
use crate::services::telegram::NotificationSink;

const NO_MATCHES_MESSAGE: &str =
    "\u{1F4ED} *Daily Summary:* no symbols matched the screening criteria today.";

const DISCLAIMER: &str = "\u{1F4E2} *Disclaimer:* screener output is a reference only. \
Always check the bid/offer before entry.";

pub struct Reporter {
    sink: Arc<dyn NotificationSink + Send + Sync>,
}

impl Reporter {
    pub fn new(sink: Arc<dyn NotificationSink + Send + Sync>) -> Self {
        Self { sink }
    }

    /// Send exactly one message for this run: the hit summary, or the fixed
    /// "no matches" text. A delivery failure is logged and swallowed.
    pub async fn report(&self, hits: &[ScreeningHit]) {
        let message = if hits.is_empty() {
            NO_MATCHES_MESSAGE.to_string()
        } else {
            format_summary(hits)
        };

        match self.sink.send(&message).await {
            Ok(()) => info!(hits = hits.len(), "summary sent with {} hits", hits.len()),
            Err(e) => error!(error = %e, "failed to send summary: {}", e),
        }
    }
}

/// Build the daily summary: header, one block per hit (price integer-
/// rounded, MFI one decimal, value in billions one decimal), disclaimer.
pub fn format_summary(hits: &[ScreeningHit]) -> String {
    let mut message = String::from("\u{1F4CB} *DAILY MONEY FLOW SUMMARY* \u{1F4CB}\n");
    message.push_str("------------------------------------------\n");
    message.push_str("Symbols showing heavy accumulation today:\n\n");

    for hit in hits {
        message.push_str(&format!("\u{1F539} *{}*\n", hit.symbol));
        message.push_str(&format!(
            "   Price: {:.0} | MFI: {:.1}\n",
            hit.price, hit.mfi
        ));
        message.push_str(&format!(
            "   Value: Rp{:.1}B\n\n",
            hit.estimated_value / 1e9
        ));
    }

    message.push_str(DISCLAIMER);
    message
}
