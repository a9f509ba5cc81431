use crate::domain::BuyAlert;
use anyhow::Result;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    pub async fn send(&self, alert: &BuyAlert) -> Result<()> {
        println!(
            "💸 {:.4} SOL buy ({}) - {}",
            alert.sol_spent,
            alert.tier.label(),
            alert.mint
        );
        info!("Buy alert sent to console: {:.4} SOL", alert.sol_spent);
        Ok(())
    }
}
