use std::env;

use anyhow::{anyhow, Result};

pub const DEFAULT_MIN_BUY_SOL: f64 = 0.00428;
pub const DEFAULT_TIERS: [f64; 3] = [2.0, 5.0, 10.0];
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tracked_mint: String,
    pub min_buy_sol: f64,
    pub tiers: [f64; 3],
    pub scoped_spend: bool,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub helius_secret: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let tracked_mint =
            env::var("CONTRACT_MINT").map_err(|_| anyhow!("CONTRACT_MINT must be set in .env"))?;
        if tracked_mint.trim().is_empty() {
            return Err(anyhow!("CONTRACT_MINT cannot be empty"));
        }

        let min_buy_sol = env::var("MIN_BUY_SOL")
            .unwrap_or_default()
            .parse()
            .unwrap_or(DEFAULT_MIN_BUY_SOL);

        let tiers = parse_tiers(&env::var("WHALE_TIERS").unwrap_or_default());

        let scoped_spend = env::var("SCOPED_SPEND")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        // Credentials are deliberately not validated here; a bad token
        // surfaces as logged delivery failures at send time.
        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN").ok();
        let telegram_chat_id = env::var("TELEGRAM_CHAT_ID").ok();

        let helius_secret = env::var("HELIUS_SECRET").ok().filter(|s| !s.is_empty());

        let port = env::var("PORT")
            .unwrap_or_default()
            .parse()
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            tracked_mint,
            min_buy_sol,
            tiers,
            scoped_spend,
            telegram_bot_token,
            telegram_chat_id,
            helius_secret,
            port,
        })
    }
}

/// Parse a "2,5,10"-style threshold list. Configured values are sorted
/// ascending; invalid entries are skipped and missing positions fall
/// back to the defaults position-by-position.
pub fn parse_tiers(raw: &str) -> [f64; 3] {
    let mut parsed: Vec<f64> = raw
        .split(',')
        .filter_map(|s| s.trim().parse::<f64>().ok())
        .filter(|v| *v > 0.0)
        .collect();
    parsed.sort_by(f64::total_cmp);

    [
        parsed.first().copied().unwrap_or(DEFAULT_TIERS[0]),
        parsed.get(1).copied().unwrap_or(DEFAULT_TIERS[1]),
        parsed.get(2).copied().unwrap_or(DEFAULT_TIERS[2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::{parse_tiers, DEFAULT_TIERS};

    #[test]
    fn parses_full_list() {
        assert_eq!(parse_tiers("1,3,7"), [1.0, 3.0, 7.0]);
    }

    #[test]
    fn sorts_unordered_input() {
        assert_eq!(parse_tiers("10,2,5"), [2.0, 5.0, 10.0]);
    }

    #[test]
    fn fills_missing_positions_with_defaults() {
        assert_eq!(parse_tiers("3"), [3.0, 5.0, 10.0]);
        assert_eq!(parse_tiers("3,6"), [3.0, 6.0, 10.0]);
    }

    #[test]
    fn skips_garbage_entries() {
        assert_eq!(parse_tiers("2,banana,10,-4"), [2.0, 10.0, 10.0]);
    }

    #[test]
    fn handles_empty_input() {
        assert_eq!(parse_tiers(""), DEFAULT_TIERS);
        assert_eq!(parse_tiers(" , , "), DEFAULT_TIERS);
    }
}
