use crate::config::AppConfig;
use crate::domain::{BuyAlert, Tier, TransferEvent};

const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

#[derive(Debug, Clone)]
pub struct BuyClassifier {
    tracked_mint: String,
    min_buy_sol: f64,
    tiers: [f64; 3],
    scoped_spend: bool,
}

impl BuyClassifier {
    pub fn new(
        tracked_mint: impl Into<String>,
        min_buy_sol: f64,
        tiers: [f64; 3],
        scoped_spend: bool,
    ) -> Self {
        Self {
            tracked_mint: tracked_mint.into(),
            min_buy_sol,
            tiers,
            scoped_spend,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.tracked_mint.clone(),
            config.min_buy_sol,
            config.tiers,
            config.scoped_spend,
        )
    }

    /// Decide whether `event` is a qualifying buy of the tracked mint.
    ///
    /// Spend is the sum of all positive outgoing native transfers in the
    /// event; with `scoped_spend` on, only transfers sent by an account
    /// that received the tracked mint count.
    pub fn evaluate(&self, event: &TransferEvent) -> Option<BuyAlert> {
        if !event
            .token_transfers
            .iter()
            .any(|t| t.mint == self.tracked_mint)
        {
            return None;
        }

        let buyers: Vec<&str> = event
            .token_transfers
            .iter()
            .filter(|t| t.mint == self.tracked_mint)
            .filter_map(|t| t.to_user_account.as_deref())
            .collect();

        let lamports: i64 = event
            .native_transfers
            .iter()
            .filter(|n| n.amount > 0)
            .filter(|n| {
                let Some(sender) = n.from_user_account.as_deref().filter(|a| !a.is_empty()) else {
                    return false;
                };
                !self.scoped_spend || buyers.contains(&sender)
            })
            .map(|n| n.amount)
            .sum();

        let sol_spent = lamports as f64 / LAMPORTS_PER_SOL;
        if sol_spent < self.min_buy_sol {
            return None;
        }

        Some(BuyAlert::new(
            self.tracked_mint.clone(),
            sol_spent,
            self.classify(sol_spent),
            event.signature.clone(),
        ))
    }

    /// Bucket a spend amount. Boundaries are inclusive, so an amount
    /// sitting exactly on a threshold lands in the higher tier.
    pub fn classify(&self, sol: f64) -> Tier {
        let [t1, t2, t3] = self.tiers;
        if sol >= t3 {
            Tier::T10
        } else if sol >= t2 {
            Tier::T5
        } else if sol >= t1 {
            Tier::T2
        } else {
            Tier::Buy
        }
    }
}
