//! Running balance.

use rust_decimal::Decimal;

use super::types::TransactionType;

/// Running total of all accepted transactions.
///
/// Mutated only by [`LedgerService`](super::LedgerService) while it holds its
/// lock, after the transaction has passed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Balance {
    amount: Decimal,
}

impl Balance {
    /// Creates a zero balance.
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    #[must_use]
    pub(crate) fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if a withdrawal of `amount` would keep the balance at or above zero.
    #[must_use]
    pub(crate) fn covers(&self, amount: Decimal) -> bool {
        amount <= self.amount
    }

    /// Balance after moving `amount` in the given direction, or `None` if the
    /// result does not fit in a `Decimal`.
    #[must_use]
    pub(crate) fn checked_after(
        &self,
        transaction_type: TransactionType,
        amount: Decimal,
    ) -> Option<Self> {
        self.amount
            .checked_add(transaction_type.signed(amount))
            .map(|amount| Self { amount })
    }
}
