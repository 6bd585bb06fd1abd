//! Ledger service: the single owner of the balance and the transaction log.
//!
//! Both live behind one [`Mutex`], so validation and commit of a transaction
//! never interleave with another call, and a reader always sees a balance that
//! matches the log.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::balance::Balance;
use super::error::LedgerError;
use super::transaction::Transaction;
use super::types::TransactionType;

/// State guarded as one unit.
#[derive(Debug, Default)]
struct LedgerState {
    balance: Balance,
    transactions: Vec<Transaction>,
}

impl LedgerState {
    /// Wall-clock time, clamped so timestamps never go backwards in the log.
    fn next_timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.transactions.last() {
            Some(last) if last.timestamp() > now => last.timestamp(),
            _ => now,
        }
    }
}

/// Thread-safe in-memory ledger.
///
/// Construct one per process and share it (e.g. behind an `Arc`). Starts with
/// a zero balance and an empty log; there is no persistence.
#[derive(Debug, Default)]
pub struct LedgerService {
    state: Mutex<LedgerState>,
}

impl LedgerService {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and records a transaction.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. `amount` must be greater than zero
    /// 2. a withdrawal must not exceed the current balance
    /// 3. the new balance must be representable
    ///
    /// On success the transaction is appended to the log and applied to the
    /// balance under the same lock, and a copy is returned.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidAmount`, `LedgerError::InsufficientBalance`
    /// or `LedgerError::AmountOverflow` for rejected input (nothing is
    /// changed), or `LedgerError::Internal` if the state lock is poisoned.
    pub fn record_transaction(
        &self,
        amount: Decimal,
        transaction_type: TransactionType,
    ) -> Result<Transaction, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        let mut state = self.lock()?;

        if transaction_type == TransactionType::Withdrawal && !state.balance.covers(amount) {
            return Err(LedgerError::InsufficientBalance);
        }

        let balance = state
            .balance
            .checked_after(transaction_type, amount)
            .ok_or(LedgerError::AmountOverflow)?;

        let timestamp = state.next_timestamp(Utc::now());
        let transaction = Transaction::new(amount, transaction_type, timestamp);

        state.balance = balance;
        state.transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// Returns the current balance.
    pub fn current_balance(&self) -> Result<Decimal, LedgerError> {
        Ok(self.lock()?.balance.amount())
    }

    /// Returns a snapshot of every accepted transaction in acceptance order.
    ///
    /// The returned vector is a copy; changing it does not affect the ledger.
    pub fn transaction_history(&self) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.lock()?.transactions.clone())
    }

    /// Number of accepted transactions.
    pub fn transaction_count(&self) -> Result<usize, LedgerError> {
        Ok(self.lock()?.transactions.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, LedgerState>, LedgerError> {
        self.state
            .lock()
            .map_err(|_| LedgerError::Internal("ledger state lock poisoned".to_string()))
    }
}
