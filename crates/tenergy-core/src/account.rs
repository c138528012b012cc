//! # Account Extras
//!
//! App settings, saved payment cards and the informational notices shown
//! after cosmetic actions. Cards are display strings only; nothing here can
//! charge anything.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;

// =============================================================================
// Settings
// =============================================================================

/// Toggles on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub notifications: bool,
    pub dark_mode: bool,
    pub auto_rating_update: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            notifications: true,
            dark_mode: false,
            auto_rating_update: true,
        }
    }
}

impl Settings {
    /// Flips one toggle and returns its new value.
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let flag = match key {
            SettingKey::Notifications => &mut self.notifications,
            SettingKey::DarkMode => &mut self.dark_mode,
            SettingKey::AutoRatingUpdate => &mut self.auto_rating_update,
        };
        *flag = !*flag;
        *flag
    }

    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Notifications => self.notifications,
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::AutoRatingUpdate => self.auto_rating_update,
        }
    }
}

/// Names one settings toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Notifications,
    DarkMode,
    AutoRatingUpdate,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::Notifications,
        SettingKey::DarkMode,
        SettingKey::AutoRatingUpdate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingKey::Notifications => "Уведомления",
            SettingKey::DarkMode => "Тёмная тема",
            SettingKey::AutoRatingUpdate => "Авто-рейтинг RTTF",
        }
    }
}

impl FromStr for SettingKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "notifications" => Ok(SettingKey::Notifications),
            "dark_mode" | "dark" => Ok(SettingKey::DarkMode),
            "auto_rating" | "auto_rating_update" => Ok(SettingKey::AutoRatingUpdate),
            _ => Err(ValidationError::NotAllowed {
                field: "setting".to_string(),
                allowed: vec![
                    "notifications".to_string(),
                    "dark_mode".to_string(),
                    "auto_rating".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Saved Cards
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardBrand {
    Visa,
    Mastercard,
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardBrand::Visa => write!(f, "VISA"),
            CardBrand::Mastercard => write!(f, "MASTERCARD"),
        }
    }
}

/// A masked card shown on the cards and payment screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedCard {
    pub id: String,
    /// Masked number, e.g. `**** **** **** 4242`.
    pub number: String,
    /// `MM/YY`.
    pub expiry: String,
    pub brand: CardBrand,
}

fn masked(last_four: u16) -> String {
    format!("**** **** **** {:04}", last_four)
}

/// The user's saved cards. Starts with one demo VISA card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Wallet {
    pub cards: Vec<SavedCard>,
}

impl Default for Wallet {
    fn default() -> Self {
        Wallet {
            cards: vec![SavedCard {
                id: "c1".to_string(),
                number: masked(4242),
                expiry: "12/26".to_string(),
                brand: CardBrand::Visa,
            }],
        }
    }
}

impl Wallet {
    /// Card charged on the payment screen.
    pub fn primary(&self) -> Option<&SavedCard> {
        self.cards.first()
    }

    /// Appends a demo MASTERCARD with a random last-four.
    pub fn add_card(&mut self) -> &SavedCard {
        let last_four = rand::thread_rng().gen_range(1000..=9999);
        let index = self.cards.len();
        self.cards.push(SavedCard {
            id: Uuid::new_v4().to_string(),
            number: masked(last_four),
            expiry: "08/28".to_string(),
            brand: CardBrand::Mastercard,
        });
        &self.cards[index]
    }
}

// =============================================================================
// Notices
// =============================================================================

/// Informational pop-up after an action that always succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    CardAdded,
    PromoActivated { message: String },
    ChallengeSent { partner_name: String },
    ClubOpened,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CardAdded => write!(f, "Карта успешно добавлена!"),
            Notice::PromoActivated { message } => write!(f, "{}", message),
            Notice::ChallengeSent { partner_name } => write!(f, "Вызов отправлен {}", partner_name),
            Notice::ClubOpened => write!(f, "Клуб открыт!"),
        }
    }
}
