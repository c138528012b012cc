//! # App Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tenergy                                │
//! │                                                                         │
//! │  stdin line                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::parse ─── unknown word / bad argument ──┐                     │
//! │       │                                           │                     │
//! │       ▼                                           ▼                     │
//! │  Session method ─── CoreError ───────────────► AppError ──► "! ..."    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Render screen                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed command never ends the run; the error line is printed and the
//! current screen is shown again.

use serde::Serialize;
use tenergy_core::{CoreError, ValidationError};
use thiserror::Error;

/// Error returned from terminal commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Racket not found: r9"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Catalog id does not exist
    NotFound,

    /// Argument could not be parsed
    ValidationError,

    /// Booking rule refused the request
    BusinessLogic,

    /// No screen edge for this request
    Navigation,

    /// Needs a logged-in user
    Unauthorized,

    /// First word of the line is not a command
    UnknownCommand,

    /// Reading input or writing output failed
    Io,

    /// Internal error
    Internal,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    pub fn unknown_command(word: &str) -> Self {
        AppError::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command: {} (type `help`)", word),
        )
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::UnknownTable(_)
            | CoreError::UnknownTimeSlot(_)
            | CoreError::UnknownRacket(_) => ErrorCode::NotFound,
            CoreError::SlotUnavailable { .. }
            | CoreError::NoDraft
            | CoreError::DraftIncomplete { .. } => ErrorCode::BusinessLogic,
            CoreError::NotLoggedIn => ErrorCode::Unauthorized,
            CoreError::IllegalTransition { .. } => ErrorCode::Navigation,
            CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::QrUrl(e) => {
                tracing::error!("QR url failed: {}", e);
                ErrorCode::Internal
            }
        };
        AppError::new(code, err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Io, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Snapshot serialization failed: {}", err);
        AppError::new(ErrorCode::Internal, "Could not serialize session")
    }
}
