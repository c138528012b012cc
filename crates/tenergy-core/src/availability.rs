//! # Slot Availability
//!
//! Decides which table/slot cells of the time screen can be tapped.
//!
//! ## Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HistoryAvailability (default)                                          │
//! │    A slot is taken iff a non-cancelled booking holds the same table,   │
//! │    date and slot. Stable across re-renders.                             │
//! │                                                                         │
//! │  RandomAvailability (demo)                                              │
//! │    Each cell is re-rolled on every display pass, ~20% shown as taken,  │
//! │    on top of real conflicts. Nothing is remembered between passes.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The policy only drives what is *displayed*. Selecting a slot is always
//! checked against booking history, whichever policy is configured.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, TIME_SLOTS};
use crate::error::ValidationError;
use crate::types::{Booking, Table};

/// Answers whether a table is free at a given date and slot.
pub trait SlotAvailability {
    fn is_available(&self, bookings: &[Booking], table_id: u32, date: NaiveDate, slot: &str)
        -> bool;
}

/// Returns true if some booking still holds this table/date/slot.
pub fn is_taken(bookings: &[Booking], table_id: u32, date: NaiveDate, slot: &str) -> bool {
    bookings.iter().any(|b| {
        b.status.holds_slot() && b.table_id == table_id && b.date == date && b.time_slot == slot
    })
}

/// Availability derived from existing bookings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryAvailability;

impl SlotAvailability for HistoryAvailability {
    fn is_available(
        &self,
        bookings: &[Booking],
        table_id: u32,
        date: NaiveDate,
        slot: &str,
    ) -> bool {
        !is_taken(bookings, table_id, date, slot)
    }
}

const DEFAULT_TAKEN_PROBABILITY: f64 = 0.2;

/// Demo availability: random cells shown as taken on every pass.
#[derive(Debug, Clone, Copy)]
pub struct RandomAvailability {
    /// Probability that a free cell is shown as taken. Clamped to `0..=1`;
    /// NaN and infinities fall back to the default.
    pub taken_probability: f64,
}

impl RandomAvailability {
    fn effective_probability(&self) -> f64 {
        if self.taken_probability.is_finite() {
            self.taken_probability.clamp(0.0, 1.0)
        } else {
            DEFAULT_TAKEN_PROBABILITY
        }
    }
}

impl Default for RandomAvailability {
    fn default() -> Self {
        RandomAvailability {
            taken_probability: DEFAULT_TAKEN_PROBABILITY,
        }
    }
}

impl SlotAvailability for RandomAvailability {
    fn is_available(
        &self,
        bookings: &[Booking],
        table_id: u32,
        date: NaiveDate,
        slot: &str,
    ) -> bool {
        if is_taken(bookings, table_id, date, slot) {
            return false;
        }
        !rand::thread_rng().gen_bool(self.effective_probability())
    }
}

// =============================================================================
// Mode
// =============================================================================

/// Which availability policy the front end uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityMode {
    #[default]
    History,
    Random,
}

impl AvailabilityMode {
    pub fn policy(&self) -> Box<dyn SlotAvailability> {
        match self {
            AvailabilityMode::History => Box::new(HistoryAvailability),
            AvailabilityMode::Random => Box::new(RandomAvailability::default()),
        }
    }
}

impl fmt::Display for AvailabilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityMode::History => write!(f, "history"),
            AvailabilityMode::Random => write!(f, "random"),
        }
    }
}

impl FromStr for AvailabilityMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "history" | "bookings" => Ok(AvailabilityMode::History),
            "random" | "mock" => Ok(AvailabilityMode::Random),
            _ => Err(ValidationError::NotAllowed {
                field: "availability".to_string(),
                allowed: vec!["history".to_string(), "random".to_string()],
            }),
        }
    }
}

// =============================================================================
// Slot Grid
// =============================================================================

/// One cell of the time screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCell {
    pub slot: &'static str,
    pub available: bool,
}

/// One table row of the time screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub table: Table,
    pub slots: Vec<SlotCell>,
}

/// Builds the full table × slot grid for `date`.
pub fn slot_grid(
    policy: &dyn SlotAvailability,
    bookings: &[Booking],
    date: NaiveDate,
) -> Vec<TableRow> {
    catalog::tables()
        .into_iter()
        .map(|table| {
            let slots = TIME_SLOTS
                .iter()
                .map(|&slot| SlotCell {
                    slot,
                    available: policy.is_available(bookings, table.id, date, slot),
                })
                .collect();
            TableRow { table, slots }
        })
        .collect()
}
