//! # Booking Commands
//!
//! The booking wizard, payment and the end of a session.
//!
//! ## Wizard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  book ──► [Date] ─next─► [Time] ─next─► [Rackets] ─next─► [Summary]     │
//! │           date N          slot T H        racket rN                     │
//! │                                                    ─next─► [Payment]    │
//! │                                                    ─pay──► [Active]     │
//! │                                                    ─end──► [Dashboard]  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Selecting a date, slot or racket never changes the screen; only `next`
//! and `pay` move forward.

use chrono::Utc;
use tenergy_core::validation::date_options;
use tracing::info;

use super::{DateArg, Outcome};
use crate::error::{AppError, AppResult};
use crate::state::{SessionState, TerminalConfig};

/// Dashboard "book a table": a fresh draft dated today.
pub fn start(state: &mut SessionState) -> AppResult<Outcome> {
    state.session_mut().start_booking()?;
    Ok(Outcome::Render)
}

pub fn select_date(state: &mut SessionState, date: DateArg) -> AppResult<Outcome> {
    let date = match date {
        DateArg::Exact(date) => date,
        DateArg::Option(position) => {
            let options = date_options(Utc::now().date_naive());
            position
                .checked_sub(1)
                .and_then(|index| options.get(index).copied())
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "date must be between 1 and {}",
                        options.len()
                    ))
                })?
        }
    };
    state.session_mut().set_date(date)?;
    Ok(Outcome::Render)
}

pub fn select_slot(state: &mut SessionState, table_id: u32, slot: &str) -> AppResult<Outcome> {
    state.session_mut().set_table_and_slot(table_id, slot)?;
    Ok(Outcome::Render)
}

pub fn toggle_racket(state: &mut SessionState, racket_id: &str) -> AppResult<Outcome> {
    state.session_mut().toggle_equipment(racket_id)?;
    Ok(Outcome::Render)
}

pub fn next(state: &mut SessionState) -> AppResult<Outcome> {
    state.session_mut().advance()?;
    Ok(Outcome::Render)
}

/// "Confirm payment": the mock charge always succeeds.
pub fn pay(state: &mut SessionState, config: &TerminalConfig) -> AppResult<Outcome> {
    let booking = state.session_mut().confirm_payment()?;
    info!(booking_id = %booking.id, "Booking paid");
    Ok(Outcome::Notice(format!(
        "Оплачено {}",
        config.format_currency(booking.total_price)
    )))
}

/// "End early". Nothing happens when no session is active.
pub fn end(state: &mut SessionState) -> AppResult<Outcome> {
    state.session_mut().end_session();
    Ok(Outcome::Render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tenergy_core::{BookingStatus, Money, Screen};

    fn logged_in() -> SessionState {
        let mut state = SessionState::default();
        state.session_mut().login("Алексей", "79991234567");
        state
    }

    #[test]
    fn test_full_wizard() {
        let mut state = logged_in();
        let config = TerminalConfig::default();

        start(&mut state).unwrap();
        select_date(&mut state, DateArg::Option(1)).unwrap();
        next(&mut state).unwrap();
        select_slot(&mut state, 2, "10:00").unwrap();
        next(&mut state).unwrap();
        toggle_racket(&mut state, "r1").unwrap();
        next(&mut state).unwrap();
        next(&mut state).unwrap();
        assert_eq!(state.session().screen(), Screen::Payment);

        let outcome = pay(&mut state, &config).unwrap();
        assert_eq!(outcome, Outcome::Notice("Оплачено 850 ₽".to_string()));
        assert_eq!(state.session().screen(), Screen::ActiveSession);

        let booking = state.session().active_booking().unwrap();
        assert_eq!(booking.total_price, Money::from_rubles(850));
        assert_eq!(booking.date, Utc::now().date_naive());
    }

    #[test]
    fn test_date_option_bounds() {
        let mut state = logged_in();
        start(&mut state).unwrap();

        assert!(select_date(&mut state, DateArg::Option(0)).is_err());
        assert!(select_date(&mut state, DateArg::Option(15)).is_err());
        select_date(&mut state, DateArg::Option(14)).unwrap();

        let expected = date_options(Utc::now().date_naive())[13];
        assert_eq!(state.session().draft().unwrap().date, expected);
    }

    #[test]
    fn test_pay_before_payment_screen_is_refused() {
        let mut state = logged_in();
        let config = TerminalConfig::default();
        start(&mut state).unwrap();
        select_slot(&mut state, 2, "10:00").unwrap();

        let err = pay(&mut state, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::Navigation);
        assert_eq!(state.session().screen(), Screen::BookingDate);
        assert!(state.session().bookings().is_empty());
    }

    #[test]
    fn test_end_without_session_is_silent() {
        let mut state = logged_in();
        assert_eq!(end(&mut state).unwrap(), Outcome::Render);
        assert_eq!(state.session().screen(), Screen::Dashboard);
    }

    #[test]
    fn test_end_completes_booking() {
        let mut state = logged_in();
        let config = TerminalConfig::default();
        start(&mut state).unwrap();
        select_slot(&mut state, 1, "08:00").unwrap();
        for _ in 0..4 {
            next(&mut state).unwrap();
        }
        pay(&mut state, &config).unwrap();

        end(&mut state).unwrap();
        assert_eq!(state.session().bookings()[0].status, BookingStatus::Completed);
        assert_eq!(state.session().screen(), Screen::Dashboard);
    }
}
