//! # Error Types
//!
//! Domain-specific error types for tenergy-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tenergy-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog lookups, draft and screen transitions  │
//! │  └── ValidationError  - Input parsing failures                         │
//! │                                                                         │
//! │  Terminal errors (in app)                                              │
//! │  └── AppError         - What the user sees                             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Screen                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Anything a user can actually trigger from the screens falls back or
//! no-ops instead: an empty login form logs in as a guest, ending a session
//! when none is active does nothing, toggling a racket always succeeds.
//! Errors are reserved for requests the screens never produce (unknown ids,
//! skipping wizard steps).

use thiserror::Error;

use crate::screen::Screen;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Table id is not in the catalog.
    #[error("Table not found: {0}")]
    UnknownTable(u32),

    /// Time slot is not one of the catalog slots.
    #[error("Time slot not offered: {0}")]
    UnknownTimeSlot(String),

    /// Racket id is not in the catalog.
    #[error("Racket not found: {0}")]
    UnknownRacket(String),

    /// The table is already taken at this date and time.
    ///
    /// ## When This Occurs
    /// ```text
    /// bookings: [Table 2, 2026-10-18, 10:00, active]
    ///      │
    ///      ▼
    /// set_table_and_slot(2, "10:00") on 2026-10-18
    ///      │
    ///      ▼
    /// SlotUnavailable { table_id: 2, date: "2026-10-18", slot: "10:00" }
    /// ```
    #[error("Table {table_id} is already booked on {date} at {slot}")]
    SlotUnavailable {
        table_id: u32,
        date: String,
        slot: String,
    },

    /// An operation needs a booking draft but none was started.
    #[error("No booking in progress")]
    NoDraft,

    /// The draft lacks a field the requested step needs.
    #[error("Booking is missing {missing}")]
    DraftIncomplete { missing: String },

    /// The operation needs a logged-in user.
    #[error("Not logged in")]
    NotLoggedIn,

    /// The screen router has no edge between these screens.
    #[error("Cannot go from {from:?} to {to:?}")]
    IllegalTransition { from: Screen, to: Screen },

    /// The QR request URL could not be built.
    #[error("Invalid QR url: {0}")]
    QrUrl(#[from] url::ParseError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., invalid date, invalid time).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SlotUnavailable {
            table_id: 2,
            date: "2026-10-18".to_string(),
            slot: "10:00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Table 2 is already booked on 2026-10-18 at 10:00"
        );

        let err = CoreError::IllegalTransition {
            from: Screen::BookingDate,
            to: Screen::Payment,
        };
        assert_eq!(err.to_string(), "Cannot go from BookingDate to Payment");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "date".to_string(),
        };
        assert_eq!(err.to_string(), "date is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "date".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
