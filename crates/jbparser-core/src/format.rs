//! Display formatting for money values.
//!
//! Renders [`Money`] the way the bank page shows it: grouped thousands and a
//! comma as decimal separator by default.

use crate::Money;

/// Formatter configuration for [`Money`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFormat {
    /// Character between the whole part and the two decimals.
    pub decimal: char,
    /// Character between groups of three whole digits.
    pub thousands: char,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            decimal: ',',
            thousands: '.',
        }
    }
}

impl MoneyFormat {
    /// Create a formatter with the given separators.
    #[must_use]
    pub const fn new(decimal: char, thousands: char) -> Self {
        Self { decimal, thousands }
    }

    /// Format a money value, e.g. `-1.234,56`.
    #[must_use]
    pub fn format(&self, money: Money) -> String {
        let minor = money.minor_units();
        let abs = minor.unsigned_abs();
        let whole = (abs / 100).to_string();
        let cents = abs % 100;

        let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 4);
        if minor < 0 {
            out.push('-');
        }
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                out.push(self.thousands);
            }
            out.push(ch);
        }
        out.push(self.decimal);
        out.push_str(&format!("{cents:02}"));
        out
    }
}
