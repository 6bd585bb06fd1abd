//! Ledger routes.
//!
//! - `POST /ledger/transaction` records a deposit or withdrawal
//! - `GET /ledger/balance` returns the running balance
//! - `GET /ledger/transactionHistory` returns every accepted transaction in order

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use ledger_core::{Transaction, TransactionType};
use ledger_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use crate::{AppState, error::ApiError, extractors::ValidatedJson};

/// Creates the ledger routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ledger/transaction", post(record_transaction))
        .route("/ledger/balance", get(get_balance))
        .route("/ledger/transactionHistory", get(get_transaction_history))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for recording a transaction.
///
/// `amount` accepts a JSON string or a JSON number. Numbers are read from
/// their source text, never through `f64`.
#[derive(Debug, Deserialize, Validate)]
pub struct TransactionRequest {
    /// `DEPOSIT` or `WITHDRAWAL`.
    #[serde(rename = "type")]
    #[validate(required(message = "must not be null"))]
    pub transaction_type: Option<TransactionType>,
    /// Amount to move.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[validate(required(message = "must not be null"))]
    pub amount: Option<Decimal>,
}

/// Response for a transaction.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Amount moved.
    pub amount: Decimal,
    /// Transaction type.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// When the ledger accepted it.
    pub timestamp: DateTime<Utc>,
    /// Transaction ID.
    pub id: TransactionId,
}

impl From<&Transaction> for TransactionResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            amount: tx.amount(),
            transaction_type: tx.transaction_type(),
            timestamp: tx.timestamp(),
            id: tx.id(),
        }
    }
}

/// Response for the current balance.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Current balance.
    pub balance: Decimal,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/ledger/transaction` - Record a deposit or withdrawal.
async fn record_transaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TransactionRequest>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let (Some(transaction_type), Some(amount)) = (request.transaction_type, request.amount) else {
        return Err(ApiError::Internal(
            "validated transaction request has empty fields".to_string(),
        ));
    };

    match state.ledger.record_transaction(amount, transaction_type) {
        Ok(tx) => {
            info!(
                transaction_id = %tx.id(),
                transaction_type = %tx.transaction_type(),
                amount = %tx.amount(),
                "Transaction recorded"
            );
            Ok(Json(TransactionResponse::from(&tx)))
        }
        Err(e) => {
            if e.is_client_error() {
                warn!(
                    error_code = e.error_code(),
                    transaction_type = %transaction_type,
                    amount = %amount,
                    "Transaction rejected"
                );
            }
            Err(e.into())
        }
    }
}

/// GET `/ledger/balance` - Current balance.
async fn get_balance(State(state): State<AppState>) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state.ledger.current_balance()?;
    Ok(Json(BalanceResponse { balance }))
}

/// GET `/ledger/transactionHistory` - All accepted transactions, oldest first.
async fn get_transaction_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let history = state.ledger.transaction_history()?;
    Ok(Json(history.iter().map(TransactionResponse::from).collect()))
}
