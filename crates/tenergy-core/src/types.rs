//! # Domain Types
//!
//! Core domain types used throughout Tenergy.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │     Booking     │   │     Racket      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id ("r1")      │       │
//! │  │  name, phone    │   │  table_id       │   │  racket_type    │       │
//! │  │  rating         │   │  date, slot     │   │  price          │       │
//! │  │  balance        │   │  rackets[]      │   └─────────────────┘       │
//! │  └─────────────────┘   │  total_price    │                              │
//! │                        │  status         │   ┌─────────────────┐       │
//! │  ┌─────────────────┐   └─────────────────┘   │     Partner     │       │
//! │  │      Table      │                         │  rating, games  │       │
//! │  │  id, name       │   BookingStatus         └─────────────────┘       │
//! │  └─────────────────┘   Pending → Active → Completed                    │
//! │                                   └──────► Cancelled                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog entries (tables, rackets, partners, promos, support contacts) are
//! immutable. Bookings are immutable once finalized except for `status`.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::entry;
use crate::money::Money;
use crate::SESSION_LENGTH_MINUTES;

// =============================================================================
// User
// =============================================================================

/// The logged-in club member.
///
/// Fabricated locally on every login; there is no account lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// RTTF rating.
    pub rating: u32,
    pub balance: Money,
    pub bonus_points: u32,
}

impl User {
    /// First letter of the name, shown as the profile avatar.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

// =============================================================================
// Table
// =============================================================================

/// A bookable table in the club hall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Table {
    pub id: u32,
    pub name: String,
}

// =============================================================================
// Racket
// =============================================================================

/// Playing style a racket is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RacketType {
    Control,
    Universal,
    Attack,
}

impl fmt::Display for RacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RacketType::Control => write!(f, "control"),
            RacketType::Universal => write!(f, "universal"),
            RacketType::Attack => write!(f, "attack"),
        }
    }
}

/// Rental equipment that can be added to a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Racket {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub racket_type: RacketType,
    pub rating: f32,
    /// Rental price per session.
    pub price: Money,
    pub image: String,
}

// =============================================================================
// Partner
// =============================================================================

/// A club member shown in the partner finder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub rating: u32,
    pub games_count: u32,
    pub avatar: String,
}

// =============================================================================
// Promo and Support Contact
// =============================================================================

/// A dashboard promo card. Activating one only shows its notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Promo {
    pub id: u32,
    pub text: String,
    pub notice: String,
}

/// A way to reach the club administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupportContact {
    pub label: String,
    pub url: String,
}

// =============================================================================
// Booking Status
// =============================================================================

/// The status of a booking.
///
/// ## Transitions
/// ```text
/// Pending ──► Active ──► Completed
///    │          │
///    └──────────┴──────► Cancelled
/// ```
/// Finalized bookings are created directly as `Active`; `Pending` only
/// appears on drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Whether the status machine has an edge from `self` to `next`.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Active) | (Active, Completed) | (Pending, Cancelled) | (Active, Cancelled)
        )
    }

    /// Completed and cancelled bookings never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Whether a booking in this status still holds its table slot.
    pub fn holds_slot(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Active => write!(f, "active"),
            BookingStatus::Completed => write!(f, "completed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// =============================================================================
// Booking
// =============================================================================

/// A paid, finalized booking.
///
/// Equipment and total are frozen at payment time. Only `status` moves, and
/// only through the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub table_id: u32,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub time_slot: String,
    pub rackets: Vec<Racket>,
    pub status: BookingStatus,
    pub total_price: Money,
    /// When payment was confirmed; the session countdown starts here.
    #[ts(as = "String")]
    pub activated_at: DateTime<Utc>,
}

impl Booking {
    /// The string encoded into the entry QR code.
    pub fn entry_payload(&self) -> String {
        entry::entry_payload(&self.id)
    }

    /// Time left in the session at `now`, never negative.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        let end = self.activated_at + Duration::minutes(SESSION_LENGTH_MINUTES);
        (end - now).max(Duration::zero())
    }

    /// Countdown shown on the active session screen, as `mm:ss`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{Duration, NaiveDate, Utc};
    /// use tenergy_core::{Booking, BookingStatus, Money};
    ///
    /// let start = Utc::now();
    /// let booking = Booking {
    ///     id: "b1".to_string(),
    ///     table_id: 1,
    ///     date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
    ///     time_slot: "10:00".to_string(),
    ///     rackets: vec![],
    ///     status: BookingStatus::Active,
    ///     total_price: Money::from_rubles(500),
    ///     activated_at: start,
    /// };
    ///
    /// assert_eq!(booking.countdown(start + Duration::seconds(18)), "59:42");
    /// assert_eq!(booking.countdown(start + Duration::hours(2)), "00:00");
    /// ```
    pub fn countdown(&self, now: DateTime<Utc>) -> String {
        let secs = self.remaining(now).num_seconds();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Moves the booking to `next` if the status machine allows it.
    pub(crate) fn transition(&mut self, next: BookingStatus) -> bool {
        if self.status.can_transition_to(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_booking(status: BookingStatus) -> Booking {
        Booking {
            id: "b1".to_string(),
            table_id: 2,
            date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            time_slot: "10:00".to_string(),
            rackets: vec![],
            status,
            total_price: Money::from_rubles(500),
            activated_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_transitions() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Active));
        assert!(Active.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Active));
        assert!(!Active.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Completed));
        assert!(Completed.is_terminal());
        assert!(!Active.is_terminal());
    }

    #[test]
    fn test_transition_only_follows_edges() {
        let mut booking = test_booking(BookingStatus::Active);
        assert!(booking.transition(BookingStatus::Completed));
        assert_eq!(booking.status, BookingStatus::Completed);

        assert!(!booking.transition(BookingStatus::Active));
        assert_eq!(booking.status, BookingStatus::Completed);
    }

    #[test]
    fn test_remaining_is_clamped() {
        let booking = test_booking(BookingStatus::Active);
        let start = booking.activated_at;

        assert_eq!(booking.remaining(start), Duration::minutes(60));
        assert_eq!(booking.countdown(start), "60:00");
        assert_eq!(
            booking.remaining(start + Duration::minutes(90)),
            Duration::zero()
        );
    }

    #[test]
    fn test_booking_serializes_camel_case() {
        let booking = test_booking(BookingStatus::Active);
        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["tableId"], 2);
        assert_eq!(json["timeSlot"], "10:00");
        assert_eq!(json["status"], "active");
        assert_eq!(json["date"], "2026-10-18");
    }

    #[test]
    fn test_racket_type_serializes_as_type() {
        let racket = Racket {
            id: "r1".to_string(),
            name: "Tenergy Elite Pro".to_string(),
            racket_type: RacketType::Attack,
            rating: 9.8,
            price: Money::from_rubles(350),
            image: String::new(),
        };
        let json = serde_json::to_value(&racket).unwrap();
        assert_eq!(json["type"], "attack");
    }

    #[test]
    fn test_user_initial() {
        let user = User {
            id: "u1".to_string(),
            name: "Алексей".to_string(),
            phone: "79991234567".to_string(),
            rating: 450,
            balance: Money::from_rubles(1500),
            bonus_points: 100,
        };
        assert_eq!(user.initial(), Some('А'));
    }
}
