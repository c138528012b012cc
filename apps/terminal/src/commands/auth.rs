//! # Auth Commands
//!
//! Onboarding, login and logout. Login never fails: whatever was typed is
//! accepted, empty fields fall back to the guest defaults.

use tenergy_core::Screen;

use super::Outcome;
use crate::error::AppResult;
use crate::state::SessionState;

/// Onboarding "start" button: shows the login form.
pub fn start(state: &mut SessionState) -> AppResult<Outcome> {
    state.session_mut().open(Screen::Auth)?;
    Ok(Outcome::Render)
}

pub fn login(state: &mut SessionState, name: &str, phone: &str) -> AppResult<Outcome> {
    state.session_mut().login(name, phone);
    Ok(Outcome::Render)
}

pub fn logout(state: &mut SessionState) -> AppResult<Outcome> {
    state.session_mut().logout();
    Ok(Outcome::Render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_login() {
        let mut state = SessionState::default();
        start(&mut state).unwrap();
        assert_eq!(state.session().screen(), Screen::Auth);

        login(&mut state, "", "").unwrap();
        let user = state.session().user().unwrap();
        assert_eq!(user.name, "Гость");
        assert_eq!(state.session().screen(), Screen::Dashboard);
    }

    #[test]
    fn test_start_only_from_onboarding() {
        let mut state = SessionState::default();
        login(&mut state, "A", "1").unwrap();
        assert!(start(&mut state).is_err());
    }

    #[test]
    fn test_logout_returns_to_onboarding() {
        let mut state = SessionState::default();
        login(&mut state, "A", "1").unwrap();
        logout(&mut state).unwrap();
        assert!(!state.session().is_logged_in());
        assert_eq!(state.session().screen(), Screen::Onboarding);
    }
}
