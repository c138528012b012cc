//! # Booking Draft
//!
//! The in-progress booking the wizard fills in, and its price.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start_booking()     ──► BookingDraft::new(today)   date = today        │
//! │  set_date(d)         ──► draft.date = d                                 │
//! │  set_table_and_slot  ──► draft.table_id, draft.time_slot (together)     │
//! │  toggle_equipment    ──► draft.rackets ± racket                         │
//! │  confirm_payment()   ──► draft.finalize(now) ──► Booking (Active)       │
//! │                                                                         │
//! │  A new start_booking() replaces the draft wholesale.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Booking, BookingStatus, Racket};
use crate::BASE_SESSION_FEE;

/// A partially filled booking.
///
/// ## Invariants
/// - `table_id` and `time_slot` are either both set or both unset
/// - `rackets` holds each racket id at most once, in selection order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    table_id: Option<u32>,
    time_slot: Option<String>,
    rackets: Vec<Racket>,
    pub status: BookingStatus,
}

impl BookingDraft {
    /// Creates an empty draft for `today` with a fresh id.
    pub fn new(today: NaiveDate) -> Self {
        BookingDraft {
            id: Uuid::new_v4().to_string(),
            date: today,
            table_id: None,
            time_slot: None,
            rackets: Vec::new(),
            status: BookingStatus::Pending,
        }
    }

    pub fn table_id(&self) -> Option<u32> {
        self.table_id
    }

    pub fn time_slot(&self) -> Option<&str> {
        self.time_slot.as_deref()
    }

    pub fn rackets(&self) -> &[Racket] {
        &self.rackets
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Sets table and slot in one step.
    pub fn set_table_and_slot(&mut self, table_id: u32, slot: impl Into<String>) {
        self.table_id = Some(table_id);
        self.time_slot = Some(slot.into());
    }

    /// Whether the forward action out of the time screen is enabled.
    pub fn has_table_and_slot(&self) -> bool {
        self.table_id.is_some() && self.time_slot.is_some()
    }

    /// Adds the racket if absent, removes it if present.
    ///
    /// Returns whether the racket is selected afterwards.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use tenergy_core::{catalog, BookingDraft};
    ///
    /// let mut draft = BookingDraft::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    /// let r1 = catalog::find_racket("r1").unwrap();
    ///
    /// assert!(draft.toggle_racket(&r1));
    /// assert!(!draft.toggle_racket(&r1));
    /// assert!(draft.rackets().is_empty());
    /// ```
    pub fn toggle_racket(&mut self, racket: &Racket) -> bool {
        if self.is_selected(&racket.id) {
            self.rackets.retain(|r| r.id != racket.id);
            false
        } else {
            self.rackets.push(racket.clone());
            true
        }
    }

    pub fn is_selected(&self, racket_id: &str) -> bool {
        self.rackets.iter().any(|r| r.id == racket_id)
    }

    /// Current price of the draft. See [`compute_total`].
    pub fn total(&self) -> Money {
        compute_total(self)
    }

    /// Freezes the draft into an active booking.
    ///
    /// ## Errors
    /// `DraftIncomplete` if no table/slot was chosen.
    pub fn finalize(self, activated_at: DateTime<Utc>) -> CoreResult<Booking> {
        let total_price = self.total();

        let (Some(table_id), Some(time_slot)) = (self.table_id, self.time_slot) else {
            return Err(CoreError::DraftIncomplete {
                missing: "table and time slot".to_string(),
            });
        };

        Ok(Booking {
            id: self.id,
            table_id,
            date: self.date,
            time_slot,
            rackets: self.rackets,
            status: BookingStatus::Active,
            total_price,
            activated_at,
        })
    }
}

/// Price of a draft: the table fee plus every selected racket.
///
/// Always recomputed from the draft, never cached.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use tenergy_core::{catalog, compute_total, BookingDraft, Money};
///
/// let mut draft = BookingDraft::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
/// assert_eq!(compute_total(&draft), Money::from_rubles(500));
///
/// draft.toggle_racket(&catalog::find_racket("r1").unwrap()); // 350
/// draft.toggle_racket(&catalog::find_racket("r2").unwrap()); // 250
/// assert_eq!(compute_total(&draft), Money::from_rubles(1100));
/// ```
pub fn compute_total(draft: &BookingDraft) -> Money {
    BASE_SESSION_FEE + draft.rackets.iter().map(|r| r.price).sum::<Money>()
}
