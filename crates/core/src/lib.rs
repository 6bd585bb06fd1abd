//! Core ledger logic.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! It owns the running balance and the append-only transaction log, and is
//! the only place either is mutated.
//!
//! # Modules
//!
//! - `ledger` - Transactions, balance, and the thread-safe ledger service

pub mod ledger;

pub use ledger::{LedgerError, LedgerService, Transaction, TransactionType};
