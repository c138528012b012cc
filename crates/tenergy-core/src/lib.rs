//! # tenergy-core: Pure Business Logic for Tenergy
//!
//! This crate holds the whole client-side state machine of the Tenergy
//! table-tennis club app: login, the booking wizard, pricing, the active
//! session, and screen routing. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tenergy Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (terminal / web)                   │   │
//! │  │    Dashboard ──► Date ──► Time ──► Rackets ──► Summary ──► Pay  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut Session                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tenergy-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  session  │  │   draft   │  │  screen   │  │  catalog  │  │   │
//! │  │   │  Session  │  │  Draft    │  │  Screen   │  │  Tables   │  │   │
//! │  │   │  login    │  │  total    │  │  back/nav │  │  Rackets  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • ONE OWNER • SYNCHRONOUS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - The owned session state and every user-facing operation
//! - [`draft`] - Booking draft and price computation
//! - [`screen`] - Screen enum, back targets, bottom navigation
//! - [`availability`] - Slot availability policies
//! - [`catalog`] - Static tables, slots, rackets, partners, promos
//! - [`entry`] - Club entry QR payload and request URL
//! - [`account`] - Settings, saved cards, informational notices
//! - [`types`] - Domain types (User, Booking, Racket, ...)
//! - [`money`] - Integer money in kopecks
//! - [`error`] - Domain error types
//! - [`validation`] - Input normalization and parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use tenergy_core::{Money, Screen, Session};
//!
//! let mut session = Session::new();
//! session.login("Алексей", "79991234567");
//! session.start_booking().unwrap();
//! session.set_table_and_slot(2, "10:00").unwrap();
//! session.toggle_equipment("r1").unwrap();
//! while session.screen() != Screen::Payment {
//!     session.advance().unwrap();
//! }
//!
//! let booking = session.confirm_payment().unwrap();
//! assert_eq!(booking.total_price, Money::from_rubles(850));
//! assert_eq!(session.screen(), Screen::ActiveSession);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod account;
pub mod availability;
pub mod catalog;
pub mod draft;
pub mod entry;
pub mod error;
pub mod money;
pub mod screen;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use account::{Notice, SavedCard, SettingKey, Settings, Wallet};
pub use availability::{AvailabilityMode, SlotAvailability};
pub use draft::{compute_total, BookingDraft};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use screen::{NavSection, Screen};
pub use session::Session;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Table rental fee for one session, charged on every booking.
pub const BASE_SESSION_FEE: Money = Money::from_rubles(500);

/// Length of a booked session.
pub const SESSION_LENGTH_MINUTES: i64 = 60;

/// How many days ahead (today included) the date picker offers.
pub const BOOKING_WINDOW_DAYS: u32 = 14;

/// RTTF rating every freshly logged-in user starts with.
pub const STARTING_RATING: u32 = 450;

/// Wallet balance every freshly logged-in user starts with.
pub const STARTING_BALANCE: Money = Money::from_rubles(1500);

/// Bonus points every freshly logged-in user starts with.
pub const STARTING_BONUS_POINTS: u32 = 100;

/// Name used when the login form is left empty.
pub const GUEST_NAME: &str = "Гость";

/// Phone used when the login form is left empty.
pub const GUEST_PHONE: &str = "79990000000";
