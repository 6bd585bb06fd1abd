//! Single-account ledger.
//!
//! This module implements the core ledger functionality:
//! - Immutable transaction records
//! - The running balance
//! - Error types for rejected transactions
//! - The ledger service that serializes access to both

mod balance;
pub mod error;
pub mod service;
pub mod transaction;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::LedgerService;
pub use transaction::Transaction;
pub use types::TransactionType;
