//! Ledger domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a monetary movement.
///
/// Serialized as `DEPOSIT` / `WITHDRAWAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money added to the ledger.
    Deposit,
    /// Money taken out of the ledger.
    Withdrawal,
}

impl TransactionType {
    /// Returns the signed effect of `amount` on the balance.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Deposit => amount,
            Self::Withdrawal => -amount,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "DEPOSIT"),
            Self::Withdrawal => write!(f, "WITHDRAWAL"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEPOSIT" => Ok(Self::Deposit),
            "WITHDRAWAL" => Ok(Self::Withdrawal),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}
