//! # Screen Router
//!
//! Every screen of the app and the fixed edges between them.
//!
//! ## Navigation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  There is no history stack. Each screen knows:                          │
//! │                                                                         │
//! │   back_target()  static predecessor (header back arrow)                 │
//! │   links()        screens reachable by a tap on this screen              │
//! │   section()      bottom-nav tab it belongs to                           │
//! │                                                                         │
//! │  Booking wizard (forward edges owned by the session):                   │
//! │                                                                         │
//! │   BookingDate ─► BookingTime ─► BookingRackets ─► BookingSummary        │
//! │        ▲              │ needs table+slot                │               │
//! │    Dashboard          ▼                                 ▼               │
//! │                                               Payment ─► ActiveSession  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A screen reached by an unusual route still backs out to its fixed
//! predecessor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Every screen of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    #[default]
    Onboarding,
    Auth,
    Dashboard,
    BookingDate,
    BookingTime,
    BookingRackets,
    BookingSummary,
    Payment,
    Partners,
    ActiveSession,
    Profile,
    History,
    MyCards,
    Settings,
    Support,
}

impl Screen {
    pub const ALL: [Screen; 15] = [
        Screen::Onboarding,
        Screen::Auth,
        Screen::Dashboard,
        Screen::BookingDate,
        Screen::BookingTime,
        Screen::BookingRackets,
        Screen::BookingSummary,
        Screen::Payment,
        Screen::Partners,
        Screen::ActiveSession,
        Screen::Profile,
        Screen::History,
        Screen::MyCards,
        Screen::Settings,
        Screen::Support,
    ];

    /// Header title. `None` falls back to the club name.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Screen::Dashboard => Some("Tenergy"),
            Screen::MyCards => Some("Мои карты"),
            Screen::Settings => Some("Настройки"),
            Screen::Support => Some("Поддержка"),
            Screen::BookingDate => Some("Бронь"),
            Screen::BookingTime => Some("Время"),
            Screen::BookingRackets => Some("Ракетки"),
            Screen::BookingSummary => Some("Итоги"),
            Screen::Payment => Some("Оплата"),
            Screen::History => Some("История"),
            Screen::Partners => Some("Партнеры"),
            Screen::Profile => Some("Профиль"),
            Screen::Onboarding | Screen::Auth | Screen::ActiveSession => None,
        }
    }

    /// Fixed target of the header back arrow.
    pub fn back_target(&self) -> Option<Screen> {
        match self {
            Screen::MyCards | Screen::Settings | Screen::Support => Some(Screen::Profile),
            Screen::BookingDate => Some(Screen::Dashboard),
            Screen::BookingTime => Some(Screen::BookingDate),
            Screen::BookingRackets => Some(Screen::BookingTime),
            Screen::BookingSummary => Some(Screen::BookingRackets),
            Screen::Payment => Some(Screen::BookingSummary),
            Screen::History => Some(Screen::Dashboard),
            _ => None,
        }
    }

    /// Screens reachable by tapping something on this screen.
    ///
    /// Wizard forward steps, login, payment and session end are not links;
    /// the session performs those because they change state.
    pub fn links(&self) -> &'static [Screen] {
        match self {
            Screen::Onboarding => &[Screen::Auth],
            Screen::Dashboard => &[Screen::Partners, Screen::History, Screen::ActiveSession],
            Screen::Profile => &[Screen::MyCards, Screen::Settings, Screen::Support],
            _ => &[],
        }
    }

    /// Next wizard step, if this is a wizard screen with a plain forward edge.
    pub fn next_booking_step(&self) -> Option<Screen> {
        match self {
            Screen::BookingDate => Some(Screen::BookingTime),
            Screen::BookingTime => Some(Screen::BookingRackets),
            Screen::BookingRackets => Some(Screen::BookingSummary),
            Screen::BookingSummary => Some(Screen::Payment),
            _ => None,
        }
    }

    /// Bottom-nav tab highlighted while this screen is shown.
    pub fn section(&self) -> Option<NavSection> {
        match self {
            Screen::Dashboard => Some(NavSection::Home),
            Screen::BookingDate
            | Screen::BookingTime
            | Screen::BookingRackets
            | Screen::BookingSummary
            | Screen::Payment => Some(NavSection::Booking),
            Screen::Partners => Some(NavSection::Partners),
            Screen::Profile | Screen::MyCards | Screen::Settings | Screen::Support => {
                Some(NavSection::Profile)
            }
            Screen::Onboarding | Screen::Auth | Screen::ActiveSession | Screen::History => None,
        }
    }

    /// Onboarding and login are shown without header or bottom nav.
    pub fn is_entry(&self) -> bool {
        matches!(self, Screen::Onboarding | Screen::Auth)
    }

    pub fn hides_header(&self) -> bool {
        self.is_entry()
    }

    /// Bottom nav is visible for a logged-in user outside the entry screens.
    pub fn shows_nav(&self, logged_in: bool) -> bool {
        logged_in && !self.is_entry()
    }

    /// Every screen except the entry screens needs a user.
    pub fn requires_login(&self) -> bool {
        !self.is_entry()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title().unwrap_or("Tenergy"))
    }
}

/// Tabs of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NavSection {
    Home,
    Booking,
    Partners,
    Profile,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Home,
        NavSection::Booking,
        NavSection::Partners,
        NavSection::Profile,
    ];

    /// Screen a tab jumps to.
    pub fn entry_screen(&self) -> Screen {
        match self {
            NavSection::Home => Screen::Dashboard,
            NavSection::Booking => Screen::BookingDate,
            NavSection::Partners => Screen::Partners,
            NavSection::Profile => Screen::Profile,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Home => "Главная",
            NavSection::Booking => "Бронь",
            NavSection::Partners => "Партнеры",
            NavSection::Profile => "Профиль",
        }
    }
}

impl FromStr for NavSection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" | "dashboard" => Ok(NavSection::Home),
            "booking" | "book" => Ok(NavSection::Booking),
            "partners" => Ok(NavSection::Partners),
            "profile" => Ok(NavSection::Profile),
            _ => Err(ValidationError::NotAllowed {
                field: "section".to_string(),
                allowed: vec![
                    "home".to_string(),
                    "booking".to_string(),
                    "partners".to_string(),
                    "profile".to_string(),
                ],
            }),
        }
    }
}

impl FromStr for Screen {
    type Err = ValidationError;

    /// Accepts `SCREAMING_SNAKE_CASE` names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace('-', "_");
        Screen::ALL
            .into_iter()
            .find(|screen| screen_key(*screen) == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "screen".to_string(),
                allowed: Screen::ALL.iter().map(|s| screen_key(*s).to_lowercase()).collect(),
            })
    }
}

fn screen_key(screen: Screen) -> String {
    match serde_json::to_value(screen) {
        Ok(serde_json::Value::String(key)) => key,
        _ => format!("{:?}", screen).to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_back_chain() {
        let mut screen = Screen::Payment;
        let mut path = vec![screen];
        while let Some(prev) = screen.back_target() {
            path.push(prev);
            screen = prev;
        }
        assert_eq!(
            path,
            vec![
                Screen::Payment,
                Screen::BookingSummary,
                Screen::BookingRackets,
                Screen::BookingTime,
                Screen::BookingDate,
                Screen::Dashboard,
            ]
        );
    }

    #[test]
    fn test_forward_and_back_are_inverse_in_wizard() {
        for screen in Screen::ALL {
            if let Some(next) = screen.next_booking_step() {
                assert_eq!(next.back_target(), Some(screen));
            }
        }
    }

    #[test]
    fn test_profile_pages_back_to_profile() {
        for screen in [Screen::MyCards, Screen::Settings, Screen::Support] {
            assert_eq!(screen.back_target(), Some(Screen::Profile));
            assert!(Screen::Profile.links().contains(&screen));
        }
    }

    #[test]
    fn test_no_back_for_tab_roots() {
        for screen in [
            Screen::Onboarding,
            Screen::Auth,
            Screen::Dashboard,
            Screen::Partners,
            Screen::Profile,
            Screen::ActiveSession,
        ] {
            assert_eq!(screen.back_target(), None);
        }
    }

    #[test]
    fn test_sections() {
        assert_eq!(Screen::Payment.section(), Some(NavSection::Booking));
        assert_eq!(Screen::Support.section(), Some(NavSection::Profile));
        assert_eq!(Screen::History.section(), None);
        for section in NavSection::ALL {
            assert_eq!(section.entry_screen().section(), Some(section));
        }
    }

    #[test]
    fn test_chrome_flags() {
        assert!(Screen::Auth.hides_header());
        assert!(!Screen::Dashboard.hides_header());
        assert!(!Screen::Dashboard.shows_nav(false));
        assert!(Screen::Dashboard.shows_nav(true));
        assert!(!Screen::Onboarding.shows_nav(true));
    }

    #[test]
    fn test_parse() {
        assert_eq!("my_cards".parse::<Screen>().unwrap(), Screen::MyCards);
        assert_eq!("BOOKING-DATE".parse::<Screen>().unwrap(), Screen::BookingDate);
        assert!("lobby".parse::<Screen>().is_err());
        assert_eq!("book".parse::<NavSection>().unwrap(), NavSection::Booking);
    }

    #[test]
    fn test_display_uses_title() {
        assert_eq!(Screen::BookingTime.to_string(), "Время");
        assert_eq!(Screen::ActiveSession.to_string(), "Tenergy");
    }
}
