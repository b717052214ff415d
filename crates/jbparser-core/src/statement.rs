//! Statement types extracted from a bank account page.
//!
//! - [`AccountInfo`] - The account the page shows
//! - [`Transaction`] - One posting row
//! - [`AccountStatement`] - The account plus all of its rows

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Money;

/// Identity of one bank account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Display name of the account
    pub name: String,
    /// Bank registration number (sort code)
    pub registration_number: u64,
    /// Account number within the registration
    pub account_number: u64,
}

impl AccountInfo {
    /// Create a new account identity.
    #[must_use]
    pub fn new(name: impl Into<String>, registration_number: u64, account_number: u64) -> Self {
        Self {
            name: name.into(),
            registration_number,
            account_number,
        }
    }
}

impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.name, self.registration_number, self.account_number
        )
    }
}

/// A single posting row of a statement.
///
/// `use_date` is the moment the transaction happened, with time of day and
/// sub-second precision. `post_date` is the booking day and has no time
/// component. The two come from different markup and are kept distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the transaction was made
    pub use_date: DateTime<FixedOffset>,
    /// Day the transaction was booked
    pub post_date: NaiveDate,
    /// Account the row belongs to
    pub account: AccountInfo,
    /// Posting text
    pub text: String,
    /// Signed amount of the posting
    pub amount: Money,
    /// Account balance after the posting
    pub balance: Money,
    /// Category assigned by the bank
    pub category: String,
    /// Whether the row has been ticked off
    pub reconciled: bool,
}

/// An account and its transactions in page order (most recent first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatement {
    /// The selected account
    pub info: AccountInfo,
    /// Transactions as rendered on the page
    pub transactions: Vec<Transaction>,
}

impl AccountStatement {
    /// Create a statement with no transactions.
    #[must_use]
    pub const fn new(info: AccountInfo) -> Self {
        Self {
            info,
            transactions: Vec::new(),
        }
    }

    /// Add a transaction.
    #[must_use]
    pub fn with_transaction(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// Number of transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if there are no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// A window of transactions counted from either end.
    ///
    /// Positive `n` keeps the first `n` rows (the most recent ones), negative
    /// `n` keeps the last `|n|` rows (the oldest ones), and `0` keeps all.
    /// A window larger than the statement keeps all rows.
    #[must_use]
    pub fn window(&self, n: i64) -> &[Transaction] {
        let len = self.transactions.len();
        let count = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX);
        if n == 0 || count >= len {
            &self.transactions
        } else if n > 0 {
            &self.transactions[..count]
        } else {
            &self.transactions[len - count..]
        }
    }
}
