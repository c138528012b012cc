//! # Validation Module
//!
//! Input normalization for the login form and parsing for typed selections.
//!
//! ## Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Login form      → never rejected, empty fields fall back to defaults  │
//! │  Date / slot     → parsed into canonical values, errors on bad shape   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tenergy_core::validation::{normalize_name, parse_booking_date};
//!
//! assert_eq!(normalize_name("   "), "Гость");
//! assert!(parse_booking_date("2026-10-18").is_ok());
//! assert!(parse_booking_date("18.10.2026").is_err());
//! ```

use chrono::{Duration, NaiveDate};

use crate::catalog::{self, TIME_SLOTS};
use crate::error::ValidationError;
use crate::{BOOKING_WINDOW_DAYS, GUEST_NAME, GUEST_PHONE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Login Form
// =============================================================================

/// Trims the name, falling back to the guest name when nothing is left.
pub fn normalize_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        GUEST_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Trims the phone, falling back to the placeholder number when nothing is left.
///
/// The number is kept as typed; there is no format check.
pub fn normalize_phone(phone: &str) -> String {
    let phone = phone.trim();
    if phone.is_empty() {
        GUEST_PHONE.to_string()
    } else {
        phone.to_string()
    }
}

// =============================================================================
// Booking Selections
// =============================================================================

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_booking_date(input: &str) -> ValidationResult<NaiveDate> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: e.to_string(),
    })
}

/// Parses a slot such as `10:00` (or the short form `10`) into its catalog spelling.
pub fn parse_time_slot(input: &str) -> ValidationResult<&'static str> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "time slot".to_string(),
        });
    }

    let canonical = match input.parse::<u8>() {
        Ok(hour) => format!("{:02}:00", hour),
        Err(_) => input.to_string(),
    };

    catalog::find_time_slot(&canonical).ok_or_else(|| ValidationError::NotAllowed {
        field: "time slot".to_string(),
        allowed: TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
    })
}

/// Dates offered by the date picker: today and the following days.
pub fn date_options(today: NaiveDate) -> Vec<NaiveDate> {
    (0..BOOKING_WINDOW_DAYS)
        .map(|offset| today + Duration::days(i64::from(offset)))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_fallbacks() {
        assert_eq!(normalize_name(""), "Гость");
        assert_eq!(normalize_name("  Алексей "), "Алексей");
        assert_eq!(normalize_phone(""), "79990000000");
        assert_eq!(normalize_phone("79991234567"), "79991234567");
    }

    #[test]
    fn test_parse_booking_date() {
        assert_eq!(
            parse_booking_date(" 2026-10-20 ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
        );
        assert!(matches!(
            parse_booking_date(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_booking_date("2026-13-01"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_time_slot() {
        assert_eq!(parse_time_slot("10:00").unwrap(), "10:00");
        assert_eq!(parse_time_slot("9").unwrap(), "09:00");
        assert!(matches!(
            parse_time_slot("23:00"),
            Err(ValidationError::NotAllowed { .. })
        ));
        assert!(parse_time_slot("").is_err());
    }

    #[test]
    fn test_date_options_cover_window() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
        let options = date_options(today);

        assert_eq!(options.len(), 14);
        assert_eq!(options[0], today);
        assert_eq!(options[13], NaiveDate::from_ymd_opt(2027, 1, 7).unwrap());
    }
}
