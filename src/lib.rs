pub mod classifier;
pub mod config;
pub mod domain;
pub mod notifier;
pub mod server;
pub mod utils;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use classifier::BuyClassifier;
use config::AppConfig;
use notifier::{ConsoleNotifier, NotifierHub, TelegramNotifier};
use server::AppState;

pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let classifier = BuyClassifier::from_config(&config);

    let console = ConsoleNotifier::new();
    let telegram = TelegramNotifier::maybe_from_config(&config);
    if telegram.is_some() {
        info!("📱 Telegram notifications enabled");
    } else {
        info!("📱 Telegram notifications disabled (no credentials)");
    }
    let notifier = NotifierHub::new(console, telegram);

    info!("👁️  Watching mint {}", config.tracked_mint);
    info!(
        "🐳 Minimum buy {} SOL, tiers {:?}",
        config.min_buy_sol, config.tiers
    );
    if config.helius_secret.is_some() {
        info!("🔐 Webhook secret check enabled");
    }

    let port = config.port;
    let state = Arc::new(AppState {
        config,
        classifier,
        notifier,
    });
    let app = server::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
