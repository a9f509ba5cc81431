// Buywatch - Solana Buy Alert Relay
// Receives Helius webhook events and forwards whale-tier buy alerts to Telegram

use anyhow::Result;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    match dotenv::dotenv() {
        Ok(path) => info!("📄 Loaded .env from {:?}", path),
        Err(e) => warn!("⚠️  Could not load .env file: {}", e),
    }

    buywatch::run().await
}
