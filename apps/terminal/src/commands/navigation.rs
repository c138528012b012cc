//! # Navigation Commands
//!
//! Header back arrow, tap-links and the bottom navigation bar.

use tenergy_core::{NavSection, Screen};
use tracing::debug;

use super::Outcome;
use crate::error::AppResult;
use crate::state::SessionState;

/// Header back arrow. Screens without one ignore it.
pub fn back(state: &mut SessionState) -> AppResult<Outcome> {
    if state.session_mut().go_back().is_none() {
        debug!(screen = ?state.session().screen(), "No back target");
    }
    Ok(Outcome::Render)
}

pub fn open(state: &mut SessionState, screen: Screen) -> AppResult<Outcome> {
    state.session_mut().open(screen)?;
    Ok(Outcome::Render)
}

pub fn tab(state: &mut SessionState, section: NavSection) -> AppResult<Outcome> {
    state.session_mut().navigate(section)?;
    Ok(Outcome::Render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_is_noop_on_dashboard() {
        let mut state = SessionState::default();
        state.session_mut().login("A", "1");
        back(&mut state).unwrap();
        assert_eq!(state.session().screen(), Screen::Dashboard);
    }

    #[test]
    fn test_profile_pages_round_trip() {
        let mut state = SessionState::default();
        state.session_mut().login("A", "1");

        tab(&mut state, NavSection::Profile).unwrap();
        open(&mut state, Screen::Support).unwrap();
        back(&mut state).unwrap();
        assert_eq!(state.session().screen(), Screen::Profile);
    }

    #[test]
    fn test_tab_before_login_fails() {
        let mut state = SessionState::default();
        assert!(tab(&mut state, NavSection::Home).is_err());
        assert_eq!(state.session().screen(), Screen::Onboarding);
    }
}
