//! # Terminal Configuration
//!
//! Display and demo settings for the terminal front end.
//!
//! ## Sources
//! ```text
//! Default::default()  ──►  TENERGY_* environment variables  ──►  TerminalConfig
//! ```
//! Unparseable values are logged and ignored; the default stays.

use serde::{Deserialize, Serialize};
use tenergy_core::entry::DEFAULT_QR_SIZE;
use tenergy_core::{AvailabilityMode, Money};
use tracing::warn;

/// Terminal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalConfig {
    /// Club name shown on screens without a title
    pub club_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Which availability policy the time screen uses
    pub availability: AvailabilityMode,

    /// Edge of the entry QR image, in pixels
    pub qr_size: u32,
}

impl Default for TerminalConfig {
    /// ## Default Values
    /// - Club: "Tenergy"
    /// - Currency: ₽
    /// - Availability: derived from bookings
    /// - QR: 200×200
    fn default() -> Self {
        TerminalConfig {
            club_name: "Tenergy".to_string(),
            currency_symbol: "₽".to_string(),
            availability: AvailabilityMode::History,
            qr_size: DEFAULT_QR_SIZE,
        }
    }
}

impl TerminalConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TENERGY_CLUB_NAME`: Override club name
    /// - `TENERGY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TENERGY_AVAILABILITY`: `history` or `random`
    /// - `TENERGY_QR_SIZE`: QR image edge in pixels
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TerminalConfig::default();

        if let Some(club_name) = lookup("TENERGY_CLUB_NAME") {
            config.club_name = club_name;
        }

        if let Some(symbol) = lookup("TENERGY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(mode) = lookup("TENERGY_AVAILABILITY") {
            match mode.parse::<AvailabilityMode>() {
                Ok(mode) => config.availability = mode,
                Err(e) => warn!(value = %mode, "Ignoring TENERGY_AVAILABILITY: {}", e),
            }
        }

        if let Some(size) = lookup("TENERGY_QR_SIZE") {
            match size.parse::<u32>() {
                Ok(size) if size > 0 => config.qr_size = size,
                _ => warn!(value = %size, "Ignoring TENERGY_QR_SIZE"),
            }
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tenergy_core::Money;
    /// use tenergy_terminal::state::TerminalConfig;
    ///
    /// let config = TerminalConfig::default();
    /// assert_eq!(config.format_currency(Money::from_rubles(850)), "850 ₽");
    /// assert_eq!(config.format_currency(Money::from_kopecks(55050)), "550.50 ₽");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{} {}", amount, self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = TerminalConfig::from_lookup(|_| None);
        assert_eq!(config, TerminalConfig::default());
        assert_eq!(config.availability, AvailabilityMode::History);
        assert_eq!(config.qr_size, 200);
    }

    #[test]
    fn test_env_overrides() {
        let config = TerminalConfig::from_lookup(lookup(&[
            ("TENERGY_CLUB_NAME", "Tenergy Arena"),
            ("TENERGY_CURRENCY_SYMBOL", "RUB"),
            ("TENERGY_AVAILABILITY", "random"),
            ("TENERGY_QR_SIZE", "320"),
        ]));

        assert_eq!(config.club_name, "Tenergy Arena");
        assert_eq!(config.availability, AvailabilityMode::Random);
        assert_eq!(config.qr_size, 320);
        assert_eq!(config.format_currency(Money::from_rubles(500)), "500 RUB");
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = TerminalConfig::from_lookup(lookup(&[
            ("TENERGY_AVAILABILITY", "sometimes"),
            ("TENERGY_QR_SIZE", "0"),
        ]));
        assert_eq!(config.availability, AvailabilityMode::History);
        assert_eq!(config.qr_size, 200);
    }

    #[test]
    fn test_format_negative() {
        let config = TerminalConfig::default();
        assert_eq!(config.format_currency(Money::from_kopecks(-1050)), "-10.50 ₽");
    }

    #[test]
    fn test_configured_symbol_is_the_only_symbol() {
        let config = TerminalConfig::from_lookup(lookup(&[("TENERGY_CURRENCY_SYMBOL", "RUB")]));
        let text = config.format_currency(Money::from_kopecks(55_050));
        assert_eq!(text, "550.50 RUB");
        assert!(!text.contains('₽'));
    }
}
