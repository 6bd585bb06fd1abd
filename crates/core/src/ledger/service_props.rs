//! Property-based tests for LedgerService.
//!
//! Every sequence of operations is replayed against a plain running total:
//! - the balance always equals accepted deposits minus accepted withdrawals
//! - rejected calls change nothing
//! - the history holds exactly the accepted calls, in order

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::service::LedgerService;
use super::types::TransactionType;

/// Strategy to generate amounts (-100.00 to 10,000.00), including zero and negatives.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-10_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate transaction type.
fn transaction_type_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![Just(TransactionType::Deposit), Just(TransactionType::Withdrawal)]
}

fn operations(max_len: usize) -> impl Strategy<Value = Vec<(Decimal, TransactionType)>> {
    prop::collection::vec((any_amount(), transaction_type_strategy()), 0..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Balance tracks the model at every step and never goes negative.
    #[test]
    fn prop_balance_matches_model(ops in operations(60)) {
        let ledger = LedgerService::new();
        let mut model = Decimal::ZERO;
        let mut accepted = Vec::new();

        for (amount, transaction_type) in ops {
            let before = ledger.transaction_count().unwrap();
            let result = ledger.record_transaction(amount, transaction_type);

            if amount <= Decimal::ZERO {
                prop_assert_eq!(result, Err(LedgerError::InvalidAmount));
                prop_assert_eq!(ledger.transaction_count().unwrap(), before);
            } else if transaction_type == TransactionType::Withdrawal && amount > model {
                prop_assert_eq!(result, Err(LedgerError::InsufficientBalance));
                prop_assert_eq!(ledger.transaction_count().unwrap(), before);
            } else {
                let tx = result.unwrap();
                prop_assert_eq!(tx.amount(), amount);
                prop_assert_eq!(tx.transaction_type(), transaction_type);
                model += transaction_type.signed(amount);
                accepted.push(tx);
            }

            let balance = ledger.current_balance().unwrap();
            prop_assert_eq!(balance, model);
            prop_assert!(balance >= Decimal::ZERO);
        }

        prop_assert_eq!(ledger.transaction_history().unwrap(), accepted);
    }

    /// Depositing then withdrawing the same amount returns to the starting balance.
    #[test]
    fn prop_deposit_then_withdraw_cancels(
        start in positive_amount(),
        amount in positive_amount(),
    ) {
        let ledger = LedgerService::new();
        ledger.record_transaction(start, TransactionType::Deposit).unwrap();

        ledger.record_transaction(amount, TransactionType::Deposit).unwrap();
        ledger.record_transaction(amount, TransactionType::Withdrawal).unwrap();

        prop_assert_eq!(ledger.current_balance().unwrap(), start);
        prop_assert_eq!(ledger.transaction_count().unwrap(), 3);
    }

    /// A withdrawal larger than the balance is always rejected without side effects.
    #[test]
    fn prop_overdraw_always_rejected(
        deposit in positive_amount(),
        excess in positive_amount(),
    ) {
        let ledger = LedgerService::new();
        ledger.record_transaction(deposit, TransactionType::Deposit).unwrap();
        let history_before = ledger.transaction_history().unwrap();

        let result = ledger.record_transaction(deposit + excess, TransactionType::Withdrawal);

        prop_assert_eq!(result, Err(LedgerError::InsufficientBalance));
        prop_assert_eq!(ledger.current_balance().unwrap(), deposit);
        prop_assert_eq!(ledger.transaction_history().unwrap(), history_before);
    }
}
