//! Notification sink interface and the Telegram Bot API implementation.

use tracing::debug;

use crate::config::TelegramConfig;

/// Outbound message channel for the run summary.
///
/// One send per screening run; delivery failure is the caller's problem to
/// log, never to retry.
#[async_trait::async_trait]
pub trait NotificationSink {
    async fn send(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

pub struct TelegramNotifier {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl NotificationSink for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.config.api_base, self.config.token
        );

        self.client
            .post(&url)
            .form(&[
                ("chat_id", self.config.chat_id.as_str()),
                ("text", text),
                ("parse_mode", "Markdown"),
            ])
            .send()
            .await?
            .error_for_status()?;

        debug!(chat_id = %self.config.chat_id, "Telegram message delivered");
        Ok(())
    }
}
