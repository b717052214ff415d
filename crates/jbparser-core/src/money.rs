//! Money type representing an exact amount in minor units.
//!
//! A [`Money`] value stores the amount multiplied by 100 as a signed integer,
//! so `12,50` is kept as `1250`. Values are only parsed and carried; the
//! extractor never computes totals from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of decimal places represented by one minor unit.
pub const MINOR_SCALE: u32 = 2;

/// An exact monetary amount stored as integer minor units (centi-units).
///
/// # Examples
///
/// ```
/// use jbparser_core::Money;
/// use rust_decimal_macros::dec;
///
/// let amount = Money::from_minor(123_456);
/// assert_eq!(amount.minor_units(), 123_456);
/// assert_eq!(amount.to_decimal(), dec!(1234.56));
/// assert_eq!(amount.to_string(), "1234.56");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Error returned when a grouped amount string cannot be read as minor units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount {input:?}")]
pub struct ParseMoneyError {
    /// The text that was rejected, before separators were removed.
    pub input: String,
}

impl Money {
    /// Zero in any currency.
    pub const ZERO: Self = Self(0);

    /// Create a value directly from minor units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// The stored number of minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Check if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The exact decimal value, with two decimal places.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, MINOR_SCALE)
    }

    /// Parse a locale-formatted amount such as `1.234,56`.
    ///
    /// Every `.` and `,` is removed and the remaining text is read as an
    /// optionally signed count of minor units. This assumes two decimal
    /// digits are always rendered. A string in the opposite convention
    /// (`1,234.56`) yields the same number, and a string with fewer
    /// decimals (`1.234,5`) is off by a factor of ten; neither is detected.
    ///
    /// ```
    /// use jbparser_core::Money;
    ///
    /// assert_eq!(Money::parse_grouped("1.234,56").unwrap(), Money::from_minor(123_456));
    /// assert_eq!(Money::parse_grouped("-0,05").unwrap(), Money::from_minor(-5));
    /// assert!(Money::parse_grouped("12,5O").is_err());
    /// ```
    pub fn parse_grouped(s: &str) -> Result<Self, ParseMoneyError> {
        let digits: String = s.chars().filter(|c| *c != '.' && *c != ',').collect();
        digits
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ParseMoneyError {
                input: s.to_string(),
            })
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
