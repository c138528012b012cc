//! # Session
//!
//! The single, exclusively owned state of one app run: who is logged in,
//! which screen is shown, the booking draft, booking history and the
//! account extras. Every user action is a `&mut self` method here.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  User Action            Method                   Screen Afterwards      │
//! │  ───────────            ──────                   ─────────────────      │
//! │                                                                         │
//! │  "Продолжить" ─────────► login(name, phone) ───► Dashboard             │
//! │  "Забронировать" ──────► start_booking() ──────► BookingDate           │
//! │  Tap a date ───────────► set_date(d) ──────────► (unchanged)           │
//! │  Tap a slot ───────────► set_table_and_slot() ─► (unchanged)           │
//! │  Tap a racket ─────────► toggle_equipment() ───► (unchanged)           │
//! │  "Далее" ──────────────► advance() ────────────► next wizard step      │
//! │  "Подтвердить платеж" ─► confirm_payment() ────► ActiveSession         │
//! │  "Завершить раньше" ───► end_session() ────────► Dashboard             │
//! │  "Выйти" ──────────────► logout() ─────────────► Onboarding            │
//! │                                                                         │
//! │  All calls are synchronous; one runs to completion before the next.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::account::{Notice, SettingKey, Settings, Wallet};
use crate::availability::{self, SlotAvailability, TableRow};
use crate::catalog;
use crate::draft::BookingDraft;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::screen::{NavSection, Screen};
use crate::types::{Booking, BookingStatus, User};
use crate::validation::{normalize_name, normalize_phone};
use crate::{STARTING_BALANCE, STARTING_BONUS_POINTS, STARTING_RATING};

/// All in-memory state of one app run.
///
/// ## Invariants
/// - At most one booking has status `Active`, and `active_booking_id` is
///   its id whenever it exists
/// - `bookings` only grows; entries only change status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    screen: Screen,
    user: Option<User>,
    bookings: Vec<Booking>,
    active_booking_id: Option<String>,
    draft: Option<BookingDraft>,
    settings: Settings,
    wallet: Wallet,
}

impl Session {
    /// A fresh run, on the onboarding screen with nobody logged in.
    pub fn new() -> Self {
        Session::default()
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Finalized bookings in creation order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn active_booking_id(&self) -> Option<&str> {
        self.active_booking_id.as_deref()
    }

    pub fn active_booking(&self) -> Option<&Booking> {
        let id = self.active_booking_id.as_deref()?;
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn draft(&self) -> Option<&BookingDraft> {
        self.draft.as_ref()
    }

    /// Price of the current draft, recomputed on every call.
    pub fn draft_total(&self) -> Option<Money> {
        self.draft.as_ref().map(BookingDraft::total)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Table × slot grid for the draft's date, as the time screen shows it.
    pub fn slot_grid(&self, policy: &dyn SlotAvailability) -> Option<Vec<TableRow>> {
        let draft = self.draft.as_ref()?;
        Some(availability::slot_grid(policy, &self.bookings, draft.date))
    }

    // =========================================================================
    // Session / Auth
    // =========================================================================

    /// Logs in with whatever the form contained.
    ///
    /// Never fails: empty fields become the guest name and placeholder phone.
    /// Every call fabricates a new user with a new id.
    pub fn login(&mut self, name: &str, phone: &str) -> &User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: normalize_name(name),
            phone: normalize_phone(phone),
            rating: STARTING_RATING,
            balance: STARTING_BALANCE,
            bonus_points: STARTING_BONUS_POINTS,
        };
        info!(user_id = %user.id, name = %user.name, "User logged in");

        self.screen = Screen::Dashboard;
        self.user.insert(user)
    }

    /// Clears the user and returns to onboarding. Bookings are kept.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "User logged out");
        }
        self.screen = Screen::Onboarding;
    }

    // =========================================================================
    // Booking Wizard
    // =========================================================================

    /// Starts a new draft dated today, replacing any previous draft.
    pub fn start_booking(&mut self) -> CoreResult<&BookingDraft> {
        self.start_booking_on(Utc::now().date_naive())
    }

    /// Starts a new draft dated `today`, replacing any previous draft.
    pub fn start_booking_on(&mut self, today: NaiveDate) -> CoreResult<&BookingDraft> {
        self.require_login()?;

        let draft = BookingDraft::new(today);
        info!(draft_id = %draft.id, %today, "Booking started");
        if let Some(old) = &self.draft {
            debug!(draft_id = %old.id, "Previous draft discarded");
        }

        self.screen = Screen::BookingDate;
        Ok(&*self.draft.insert(draft))
    }

    /// Sets the draft date. Does not navigate.
    pub fn set_date(&mut self, date: NaiveDate) -> CoreResult<()> {
        let draft = self.draft.as_mut().ok_or(CoreError::NoDraft)?;
        draft.set_date(date);
        debug!(draft_id = %draft.id, %date, "Draft date set");
        Ok(())
    }

    /// Picks table and slot together. Does not navigate.
    ///
    /// ## Errors
    /// - `UnknownTable` / `UnknownTimeSlot` for ids outside the catalog
    /// - `SlotUnavailable` if a booking already holds this cell
    pub fn set_table_and_slot(&mut self, table_id: u32, slot: &str) -> CoreResult<()> {
        catalog::find_table(table_id).ok_or(CoreError::UnknownTable(table_id))?;
        let slot = catalog::find_time_slot(slot)
            .ok_or_else(|| CoreError::UnknownTimeSlot(slot.to_string()))?;

        let draft = self.draft.as_mut().ok_or(CoreError::NoDraft)?;
        if availability::is_taken(&self.bookings, table_id, draft.date, slot) {
            warn!(table_id, %slot, date = %draft.date, "Slot already booked");
            return Err(CoreError::SlotUnavailable {
                table_id,
                date: draft.date.to_string(),
                slot: slot.to_string(),
            });
        }

        draft.set_table_and_slot(table_id, slot);
        debug!(draft_id = %draft.id, table_id, %slot, "Draft table and slot set");
        Ok(())
    }

    /// Adds or removes a rental racket; returns whether it is now selected.
    pub fn toggle_equipment(&mut self, racket_id: &str) -> CoreResult<bool> {
        let racket = catalog::find_racket(racket_id)
            .ok_or_else(|| CoreError::UnknownRacket(racket_id.to_string()))?;
        let draft = self.draft.as_mut().ok_or(CoreError::NoDraft)?;

        let selected = draft.toggle_racket(&racket);
        debug!(draft_id = %draft.id, racket_id, selected, "Racket toggled");
        Ok(selected)
    }

    /// Moves one wizard step forward.
    ///
    /// ## Errors
    /// - `IllegalTransition` outside the date/time/rackets/summary screens,
    ///   reported as a move from the current screen to itself
    /// - `NoDraft` when the wizard was entered without a draft
    /// - `DraftIncomplete` leaving the time screen without table and slot
    pub fn advance(&mut self) -> CoreResult<Screen> {
        let from = self.screen;
        let next = from
            .next_booking_step()
            .ok_or(CoreError::IllegalTransition { from, to: from })?;
        let draft = self.draft.as_ref().ok_or(CoreError::NoDraft)?;

        if from == Screen::BookingTime && !draft.has_table_and_slot() {
            debug!("Forward refused: no table/slot selected");
            return Err(CoreError::DraftIncomplete {
                missing: "table and time slot".to_string(),
            });
        }

        self.screen = next;
        debug!(?from, to = ?next, "Wizard advanced");
        Ok(next)
    }

    /// Finalizes the draft into an active booking and shows the entry screen.
    ///
    /// Payment itself always succeeds. If another booking was still active it
    /// is completed first, so exactly one booking is active afterwards.
    ///
    /// ## Errors
    /// - `NotLoggedIn` without a user (logout keeps the draft)
    /// - `NoDraft` if no booking was started
    /// - `IllegalTransition` anywhere but the payment screen (the draft is kept)
    /// - `DraftIncomplete` if no table/slot was chosen (the draft is kept)
    /// - `SlotUnavailable` if the cell got booked meanwhile (the draft is kept)
    pub fn confirm_payment(&mut self) -> CoreResult<&Booking> {
        self.require_login()?;
        let draft = self.draft.as_ref().ok_or(CoreError::NoDraft)?;

        if self.screen != Screen::Payment {
            debug!(from = ?self.screen, "Payment refused outside the payment screen");
            return Err(CoreError::IllegalTransition {
                from: self.screen,
                to: Screen::ActiveSession,
            });
        }

        let (Some(table_id), Some(slot)) = (draft.table_id(), draft.time_slot()) else {
            return Err(CoreError::DraftIncomplete {
                missing: "table and time slot".to_string(),
            });
        };
        if availability::is_taken(&self.bookings, table_id, draft.date, slot) {
            return Err(CoreError::SlotUnavailable {
                table_id,
                date: draft.date.to_string(),
                slot: slot.to_string(),
            });
        }

        let draft = self.draft.take().ok_or(CoreError::NoDraft)?;
        let booking = draft.finalize(Utc::now())?;

        if let Some(previous) = self.take_active() {
            warn!(booking_id = %previous, "Previous active booking completed by new payment");
        }

        info!(
            booking_id = %booking.id,
            table_id = booking.table_id,
            slot = %booking.time_slot,
            total = %booking.total_price,
            "Payment confirmed"
        );

        self.active_booking_id = Some(booking.id.clone());
        self.screen = Screen::ActiveSession;
        let index = self.bookings.len();
        self.bookings.push(booking);
        Ok(&self.bookings[index])
    }

    /// Completes the active booking and returns to the dashboard.
    ///
    /// Silently does nothing when no booking is active. Returns whether a
    /// session was ended.
    pub fn end_session(&mut self) -> bool {
        match self.take_active() {
            Some(id) => {
                info!(booking_id = %id, "Session ended");
                self.screen = Screen::Dashboard;
                true
            }
            None => false,
        }
    }

    /// Completes the active booking (if any) and clears the pointer.
    fn take_active(&mut self) -> Option<String> {
        let id = self.active_booking_id.take()?;
        if let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) {
            booking.transition(BookingStatus::Completed);
        }
        Some(id)
    }

    // =========================================================================
    // Screen Router
    // =========================================================================

    /// Follows the header back arrow. No-op on screens without one.
    pub fn go_back(&mut self) -> Option<Screen> {
        let target = self.screen.back_target()?;
        debug!(from = ?self.screen, to = ?target, "Back");
        self.screen = target;
        Some(target)
    }

    /// Follows a tap-link from the current screen (or the header avatar).
    ///
    /// ## Errors
    /// - `IllegalTransition` if the current screen has no such link, or the
    ///   active session is opened with nothing active
    /// - `NotLoggedIn` for screens behind login
    pub fn open(&mut self, target: Screen) -> CoreResult<Screen> {
        let from = self.screen;
        let via_avatar = target == Screen::Profile && !from.hides_header();

        if !from.links().contains(&target) && !via_avatar {
            return Err(CoreError::IllegalTransition { from, to: target });
        }
        if target.requires_login() {
            self.require_login()?;
        }
        if target == Screen::ActiveSession && self.active_booking_id.is_none() {
            return Err(CoreError::IllegalTransition { from, to: target });
        }

        debug!(?from, to = ?target, "Open");
        self.screen = target;
        Ok(target)
    }

    /// Bottom navigation tap.
    ///
    /// The booking tab resumes the current draft at its date screen, or
    /// starts one if none exists.
    pub fn navigate(&mut self, section: NavSection) -> CoreResult<Screen> {
        self.require_login()?;

        if section == NavSection::Booking && self.draft.is_none() {
            self.start_booking()?;
        }

        let target = section.entry_screen();
        debug!(from = ?self.screen, to = ?target, "Bottom nav");
        self.screen = target;
        Ok(target)
    }

    // =========================================================================
    // Cosmetic Actions
    // =========================================================================

    /// Sends a game challenge. Unknown partners are ignored.
    pub fn challenge_partner(&mut self, partner_id: &str) -> Option<Notice> {
        let partner = catalog::find_partner(partner_id)?;
        info!(partner_id, "Challenge sent");
        Some(Notice::ChallengeSent {
            partner_name: partner.name,
        })
    }

    /// Activates a dashboard promo. Unknown promos are ignored.
    pub fn activate_promo(&mut self, promo_id: u32) -> Option<Notice> {
        let promo = catalog::find_promo(promo_id)?;
        info!(promo_id, "Promo activated");
        Some(Notice::PromoActivated {
            message: promo.notice,
        })
    }

    /// Unlocks the club door. Only meaningful with an active booking.
    pub fn open_club(&mut self) -> Option<Notice> {
        let booking = self.active_booking()?;
        info!(booking_id = %booking.id, "Club door opened");
        Some(Notice::ClubOpened)
    }

    /// Adds a demo card to the wallet.
    pub fn add_card(&mut self) -> Notice {
        let card = self.wallet.add_card();
        info!(card_id = %card.id, "Card added");
        Notice::CardAdded
    }

    /// Flips a settings toggle; returns the new value.
    pub fn toggle_setting(&mut self, key: SettingKey) -> bool {
        let value = self.settings.toggle(key);
        debug!(?key, value, "Setting toggled");
        value
    }

    fn require_login(&self) -> CoreResult<()> {
        if self.user.is_some() {
            Ok(())
        } else {
            Err(CoreError::NotLoggedIn)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
