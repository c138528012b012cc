//! # Money Module
//!
//! Provides the `Money` type for prices, balances and booking totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices in the club are whole rubles today (500 ₽ table, 350 ₽ racket) │
//! │  but discounts and bonus payments will produce kopecks.                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kopecks                                          │
//! │    500 ₽ = 50_000 kopecks, summed exactly, never rounded               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tenergy_core::money::Money;
//!
//! let table = Money::from_rubles(500);
//! let racket = Money::from_rubles(350);
//!
//! assert_eq!((table + racket).rubles(), 850);
//! assert_eq!((table + racket).to_string(), "850");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in kopecks (1/100 of a ruble).
///
/// ## Where Money is Used
/// ```text
/// Racket.price ──┐
///                ├──► compute_total(draft) ──► Booking.total_price
/// BASE_SESSION_FEE
///
/// User.balance ──► Profile screen
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kopecks.
    ///
    /// ## Example
    /// ```rust
    /// use tenergy_core::money::Money;
    ///
    /// let price = Money::from_kopecks(35_050); // 350.50 ₽
    /// assert_eq!(price.rubles(), 350);
    /// assert_eq!(price.kopecks_part(), 50);
    /// ```
    #[inline]
    pub const fn from_kopecks(kopecks: i64) -> Self {
        Money(kopecks)
    }

    /// Creates a Money value from whole rubles.
    #[inline]
    pub const fn from_rubles(rubles: i64) -> Self {
        Money(rubles * 100)
    }

    /// Returns the value in kopecks.
    #[inline]
    pub const fn kopecks(&self) -> i64 {
        self.0
    }

    /// Returns the whole-ruble portion (truncated toward zero).
    #[inline]
    pub const fn rubles(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the kopeck portion (always 0-99).
    #[inline]
    pub const fn kopecks_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows whole rubles as `850` and fractional amounts as `850.50`.
/// The currency symbol belongs to the front end.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        if self.kopecks_part() == 0 {
            write!(f, "{}{}", sign, self.rubles().abs())
        } else {
            write!(
                f,
                "{}{}.{:02}",
                sign,
                self.rubles().abs(),
                self.kopecks_part()
            )
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rubles() {
        let money = Money::from_rubles(350);
        assert_eq!(money.kopecks(), 35_000);
        assert_eq!(money.rubles(), 350);
        assert_eq!(money.kopecks_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rubles(1100).to_string(), "1100");
        assert_eq!(Money::from_kopecks(55_050).to_string(), "550.50");
        assert_eq!(Money::from_kopecks(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rubles(500);
        let b = Money::from_rubles(350);

        assert_eq!((a + b).rubles(), 850);
        assert_eq!((a - b).rubles(), 150);
        assert!((b - a).is_negative());

        let mut c = a;
        c += b;
        assert_eq!(c, Money::from_rubles(850));
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_rubles(350), Money::from_rubles(250)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_rubles(600));

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }
}
