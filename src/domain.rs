use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One element of an enhanced-transaction webhook batch.
///
/// Every field defaults so a sparse event still deserializes; unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferEvent {
    pub signature: Option<String>,
    pub token_transfers: Vec<TokenTransfer>,
    pub native_transfers: Vec<NativeTransfer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenTransfer {
    pub mint: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub token_amount: f64,
    pub from_user_account: Option<String>,
    pub to_user_account: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeTransfer {
    /// Lamports. A wrong-typed value collapses to zero instead of
    /// failing the whole event.
    #[serde(deserialize_with = "lenient_i64")]
    pub amount: i64,
    pub from_user_account: Option<String>,
    pub to_user_account: Option<String>,
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().unwrap_or(0))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// Purchase size bucket, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Buy,
    T2,
    T5,
    T10,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Buy => "🟩 buy",
            Tier::T2 => "🟧 T2 WHALE",
            Tier::T5 => "🟥 T5 WHALE",
            Tier::T10 => "🟪 T10 WHALE",
        }
    }
}

/// A qualifying purchase of the tracked mint.
#[derive(Debug, Clone)]
pub struct BuyAlert {
    pub mint: String,
    pub sol_spent: f64,
    pub tier: Tier,
    pub signature: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl BuyAlert {
    pub fn new(
        mint: impl Into<String>,
        sol_spent: f64,
        tier: Tier,
        signature: Option<String>,
    ) -> Self {
        Self {
            mint: mint.into(),
            sol_spent,
            tier,
            signature,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransferEvent;
    use serde_json::json;

    #[test]
    fn deserializes_sparse_event() {
        let event: TransferEvent =
            serde_json::from_value(json!({ "signature": "5abc" })).expect("should deserialize");
        assert_eq!(event.signature.as_deref(), Some("5abc"));
        assert!(event.token_transfers.is_empty());
        assert!(event.native_transfers.is_empty());
    }

    #[test]
    fn defaults_wrong_typed_amounts_to_zero() {
        let event: TransferEvent = serde_json::from_value(json!({
            "tokenTransfers": [{ "mint": "M", "tokenAmount": "lots" }],
            "nativeTransfers": [{ "amount": "oops", "fromUserAccount": "A" }]
        }))
        .expect("should deserialize");
        assert_eq!(event.token_transfers[0].token_amount, 0.0);
        assert_eq!(event.native_transfers[0].amount, 0);
    }

    #[test]
    fn ignores_unknown_fields() {
        let event: TransferEvent = serde_json::from_value(json!({
            "signature": "5abc",
            "type": "SWAP",
            "timestamp": 1700000000,
            "nativeTransfers": [{ "amount": 42, "fromUserAccount": "A", "toUserAccount": "B" }]
        }))
        .expect("should deserialize");
        assert_eq!(event.native_transfers[0].amount, 42);
        assert_eq!(event.native_transfers[0].from_user_account.as_deref(), Some("A"));
    }
}
