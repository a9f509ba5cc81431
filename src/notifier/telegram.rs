use std::time::Duration;

use crate::config::AppConfig;
use crate::domain::BuyAlert;
use crate::utils::mask_bot_url;
use anyhow::{anyhow, Result};
use tracing::{info, warn};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    bot_token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            bot_token,
            chat_id,
            client,
        }
    }

    pub fn maybe_from_config(config: &AppConfig) -> Option<Self> {
        match (&config.telegram_bot_token, &config.telegram_chat_id) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some(Self::new(token.clone(), chat_id.clone()))
            }
            _ => None,
        }
    }

    pub async fn send(&self, alert: &BuyAlert) -> Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": render_message(alert),
            "parse_mode": "HTML",
            "disable_web_page_preview": true,
        });

        let response = self.client.post(&url).json(&payload).send().await?;

        if response.status().is_success() {
            info!(
                "Buy alert sent to Telegram: {:.4} SOL ({})",
                alert.sol_spent,
                alert.tier.label()
            );
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(
                "Failed to send Telegram alert via {}: {}",
                mask_bot_url(&url),
                error_text
            );
            Err(anyhow!("Failed to send Telegram alert"))
        }
    }
}

/// Render the HTML alert text. The signature links to the transaction
/// on Solscan when present, otherwise degrades to plain "tx".
pub fn render_message(alert: &BuyAlert) -> String {
    let sig_link = match &alert.signature {
        Some(sig) => format!("<a href=\"https://solscan.io/tx/{sig}\">tx</a>"),
        None => "tx".to_string(),
    };

    format!(
        "⌨️🖥️💰💲💸\n<b>BUY DETECTED</b>\nMint: <code>{}</code>\nSize: <b>{:.4} SOL</b> ({})\nSig: {}",
        alert.mint,
        alert.sol_spent,
        alert.tier.label(),
        sig_link
    )
}

#[cfg(test)]
mod tests {
    use super::render_message;
    use crate::domain::{BuyAlert, Tier};

    #[test]
    fn renders_tiered_message_with_signature_link() {
        let alert = BuyAlert::new("MintAddr", 3.0, Tier::T2, Some("5abc".to_string()));
        let text = render_message(&alert);
        assert!(text.contains("<b>BUY DETECTED</b>"));
        assert!(text.contains("Mint: <code>MintAddr</code>"));
        assert!(text.contains("3.0000 SOL"));
        assert!(text.contains("🟧 T2 WHALE"));
        assert!(text.contains("<a href=\"https://solscan.io/tx/5abc\">tx</a>"));
    }

    #[test]
    fn falls_back_to_plain_tx_without_signature() {
        let alert = BuyAlert::new("MintAddr", 12.0, Tier::T10, None);
        let text = render_message(&alert);
        assert!(text.contains("🟪 T10 WHALE"));
        assert!(text.ends_with("Sig: tx"));
        assert!(!text.contains("solscan.io"));
    }

    #[test]
    fn formats_amount_to_four_decimals() {
        let alert = BuyAlert::new("MintAddr", 0.123456, Tier::Buy, None);
        assert!(render_message(&alert).contains("0.1235 SOL"));
    }
}
