//! # Session State
//!
//! Holds the one `Session` of this run together with the availability
//! policy picked at startup.
//!
//! ## Ownership
//! The run loop owns a `SessionState` and lends it to one command at a
//! time, so there is no locking: each command gets `&mut SessionState`
//! and returns before the next line is read.

use tenergy_core::availability::TableRow;
use tenergy_core::{AvailabilityMode, Session, SlotAvailability};

pub struct SessionState {
    session: Session,
    mode: AvailabilityMode,
    policy: Box<dyn SlotAvailability>,
}

impl SessionState {
    /// Creates a fresh session using `mode` for the time screen.
    pub fn new(mode: AvailabilityMode) -> Self {
        SessionState {
            session: Session::new(),
            mode,
            policy: mode.policy(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn mode(&self) -> AvailabilityMode {
        self.mode
    }

    /// Slot grid for the current draft date, one availability pass.
    pub fn slot_grid(&self) -> Option<Vec<TableRow>> {
        self.session.slot_grid(self.policy.as_ref())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(AvailabilityMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_needs_draft() {
        let mut state = SessionState::default();
        assert!(state.slot_grid().is_none());

        state.session_mut().login("Алексей", "79991234567");
        state.session_mut().start_booking().unwrap();
        let grid = state.slot_grid().unwrap();
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn test_mode_is_kept() {
        let state = SessionState::new(AvailabilityMode::Random);
        assert_eq!(state.mode(), AvailabilityMode::Random);
    }
}
