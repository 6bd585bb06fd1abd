//! Transaction record.

use chrono::{DateTime, Utc};
use ledger_shared::types::TransactionId;
use rust_decimal::Decimal;

use super::types::TransactionType;

/// One accepted monetary movement.
///
/// Only [`LedgerService`](super::LedgerService) creates transactions, and only
/// after the amount has been validated, so `amount` is always positive. Fields
/// are private: a transaction cannot change once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    amount: Decimal,
    transaction_type: TransactionType,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(
        amount: Decimal,
        transaction_type: TransactionType,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            transaction_type,
            timestamp,
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Amount moved, always greater than zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Deposit or withdrawal.
    #[must_use]
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// When the ledger accepted the transaction.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the signed effect on the balance.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.transaction_type.signed(self.amount)
    }
}
