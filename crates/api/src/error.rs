//! API error type and its mapping to HTTP responses.
//!
//! Every error leaves the service as `{ timestamp, error, message, status }`.
//! Internal details are logged, never returned.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use ledger_core::LedgerError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Message returned for every internal fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The ledger rejected or failed the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A field had the wrong type or an unparsable value (bad enum, bad decimal).
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The body was not valid JSON, or was not sent as JSON.
    #[error("Malformed JSON request: {0}")]
    MalformedJson(String),

    /// Required fields were missing. Each entry reads `field: message`.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Unexpected failure outside the ledger.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// Short error title.
    pub error: &'static str,
    /// Human-readable detail.
    pub message: String,
    /// HTTP status code, repeated in the body.
    pub status: u16,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Ledger(e) => StatusCode::from_u16(e.http_status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::InvalidFormat(_) | Self::MalformedJson(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the `error` title for the response body.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Ledger(LedgerError::InvalidAmount | LedgerError::AmountOverflow) => {
                "Invalid Request"
            }
            Self::Ledger(LedgerError::InsufficientBalance) => "Insufficient Balance",
            Self::InvalidFormat(_) => "Invalid Format",
            Self::MalformedJson(_) => "Malformed JSON request",
            Self::Validation(_) => "Validation Failed",
            Self::Ledger(LedgerError::Internal(_)) | Self::Internal(_) => "Internal Server Error",
        }
    }

    /// Returns the client-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Ledger(LedgerError::Internal(_)) | Self::Internal(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            Self::Ledger(e) => e.to_string(),
            Self::InvalidFormat(msg) | Self::MalformedJson(msg) => msg.clone(),
            Self::Validation(errors) => format!("[{}]", errors.join(", ")),
        }
    }

    /// Builds the JSON body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            timestamp: Utc::now(),
            error: self.title(),
            message: self.message(),
            status: self.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed with internal error");
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::InvalidFormat(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => Self::MalformedJson(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => Self::MalformedJson(e.body_text()),
            other => Self::MalformedJson(other.body_text()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), ToString::to_string);
                    format!("{field}: {message}")
                })
            })
            .collect();
        messages.sort();
        Self::Validation(messages)
    }
}
