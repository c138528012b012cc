//! # Account Commands
//!
//! Promos, partner challenges, the club door, saved cards and settings.
//! None of these can fail in a way the user would notice; unknown ids are
//! ignored.

use tenergy_core::{Notice, SettingKey};

use super::Outcome;
use crate::error::AppResult;
use crate::state::SessionState;

fn notice_or_render(notice: Option<Notice>) -> Outcome {
    match notice {
        Some(notice) => Outcome::Notice(notice.to_string()),
        None => Outcome::Render,
    }
}

pub fn activate_promo(state: &mut SessionState, promo_id: u32) -> AppResult<Outcome> {
    Ok(notice_or_render(state.session_mut().activate_promo(promo_id)))
}

pub fn challenge(state: &mut SessionState, partner_id: &str) -> AppResult<Outcome> {
    Ok(notice_or_render(state.session_mut().challenge_partner(partner_id)))
}

pub fn open_club(state: &mut SessionState) -> AppResult<Outcome> {
    Ok(notice_or_render(state.session_mut().open_club()))
}

pub fn add_card(state: &mut SessionState) -> AppResult<Outcome> {
    let notice = state.session_mut().add_card();
    Ok(Outcome::Notice(notice.to_string()))
}

pub fn toggle(state: &mut SessionState, key: SettingKey) -> AppResult<Outcome> {
    state.session_mut().toggle_setting(key);
    Ok(Outcome::Render)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> SessionState {
        let mut state = SessionState::default();
        state.session_mut().login("A", "1");
        state
    }

    #[test]
    fn test_unknown_ids_render() {
        let mut state = logged_in();
        assert_eq!(challenge(&mut state, "p42").unwrap(), Outcome::Render);
        assert_eq!(activate_promo(&mut state, 99).unwrap(), Outcome::Render);
        assert_eq!(open_club(&mut state).unwrap(), Outcome::Render);
    }

    #[test]
    fn test_challenge_names_partner() {
        let mut state = logged_in();
        assert_eq!(
            challenge(&mut state, "p3").unwrap(),
            Outcome::Notice("Вызов отправлен Игорь К.".to_string())
        );
    }

    #[test]
    fn test_add_card_and_toggle() {
        let mut state = logged_in();
        assert_eq!(
            add_card(&mut state).unwrap(),
            Outcome::Notice("Карта успешно добавлена!".to_string())
        );
        assert_eq!(state.session().wallet().cards.len(), 2);

        toggle(&mut state, SettingKey::Notifications).unwrap();
        assert!(!state.session().settings().notifications);
    }
}
