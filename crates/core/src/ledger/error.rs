//! Ledger error types.
//!
//! Rejections are returned as values, never as panics. A rejected call leaves
//! the balance and the log untouched.

use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Amount was zero or negative.
    #[error("Amount must be greater than zero.")]
    InvalidAmount,

    /// Withdrawal would take the balance below zero.
    #[error("Insufficient balance for withdrawal.")]
    InsufficientBalance,

    /// The resulting balance would exceed what a `Decimal` can hold.
    #[error("Amount would overflow the balance.")]
    AmountOverflow,

    /// Internal state is unusable (a previous holder of the lock panicked).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount | Self::InsufficientBalance | Self::AmountOverflow => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Returns true if this error is a rejection caused by the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
