//! Error types module
//!
//! All failures in the request pipeline are unified under the `AppError`
//! enum. Every error is caught at the handler boundary and converted to an
//! HTTP response there; nothing escapes as an unhandled fault.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for upstream issues outside our control
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Upstream model error: {0}")]
    Upstream(String),

    #[error("Upstream model call timed out after {0}s")]
    UpstreamTimeout(u64),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            // Oversize uploads are a validation failure on this API, not a 413.
            AppError::InvalidInput(_) | AppError::PayloadTooLarge(_) => 400,
            AppError::UpstreamTimeout(_) => 504,
            AppError::Upstream(_) | AppError::Io(_) | AppError::Internal(_) => 500,
        }
    }

    /// Client-facing message. Validation errors surface their bare message
    /// without the taxonomy prefix; I/O failures are collapsed into a
    /// generic analysis failure on the wire, the detail stays in the logs.
    pub fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Io(_) => "Failed to analyze image".to_string(),
            other => other.to_string(),
        }
    }

    /// Log level for this error.
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::PayloadTooLarge(_) => LogLevel::Debug,
            AppError::Upstream(_) | AppError::UpstreamTimeout(_) => LogLevel::Warn,
            AppError::Io(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}
