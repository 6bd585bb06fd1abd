//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while assembling the application, before any request is served.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The configured listen address is not a valid socket address.
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

impl AppError {
    /// Returns a stable error code for logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidAddress(_) => "INVALID_ADDRESS",
        }
    }
}
