mod console;
mod telegram;

pub use console::ConsoleNotifier;
pub use telegram::{render_message, TelegramNotifier};

use crate::domain::BuyAlert;
use anyhow::Result;
use tracing::warn;

pub struct NotifierHub {
    console: ConsoleNotifier,
    telegram: Option<TelegramNotifier>,
}

impl NotifierHub {
    pub fn new(console: ConsoleNotifier, telegram: Option<TelegramNotifier>) -> Self {
        Self { console, telegram }
    }

    /// Fan an alert out to every configured sink. A Telegram delivery
    /// failure is logged and swallowed; the webhook source still gets a
    /// success response.
    pub async fn send(&self, alert: &BuyAlert) -> Result<()> {
        self.console.send(alert).await?;

        if let Some(telegram) = &self.telegram {
            if let Err(e) = telegram.send(alert).await {
                warn!("Telegram notification failed: {}", e);
            }
        }

        Ok(())
    }
}
