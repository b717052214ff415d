//! Configuration for page extraction.

use chrono::{FixedOffset, Offset, Utc};

/// Default format of the timestamp embedded in a row's click handler.
pub const USE_DATE_FORMAT: &str = "%Y-%m-%d-%H.%M.%S%.f";

/// Default format of the compact booking date.
pub const POST_DATE_FORMAT: &str = "%d.%m.%Y";

/// Default pattern locating the timestamp inside the click handler.
///
/// The handler carries a JavaScript object literal with escaped quotes, e.g.
/// `\'id\':\'2023-09-01-13.45.12.500000\'`. Group 1 is the timestamp.
pub const USE_DATE_PATTERN: &str = r"\\'id\\':\\'(\d+-\d+-\d+-\d+\.\d+\.\d+\.\d+)\\'";

/// Configuration for extracting a statement from a page.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Offset in which both page dates are interpreted.
    pub offset: FixedOffset,
    /// strftime-style format of the use date.
    pub use_date_format: String,
    /// strftime-style format of the post date.
    pub post_date_format: String,
    /// Regex finding the use date in the click handler; group 1 is parsed.
    pub use_date_pattern: String,
    /// Class names and attributes the page layout is recognised by.
    pub markup: Markup,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
            use_date_format: USE_DATE_FORMAT.to_string(),
            post_date_format: POST_DATE_FORMAT.to_string(),
            use_date_pattern: USE_DATE_PATTERN.to_string(),
            markup: Markup::default(),
        }
    }
}

impl PageConfig {
    /// Create the default configuration (UTC, the bank's date formats).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset dates are interpreted in.
    pub const fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Set the use date format.
    pub fn with_use_date_format(mut self, format: impl Into<String>) -> Self {
        self.use_date_format = format.into();
        self
    }

    /// Set the post date format.
    pub fn with_post_date_format(mut self, format: impl Into<String>) -> Self {
        self.post_date_format = format.into();
        self
    }

    /// Set the pattern locating the use date in the click handler.
    pub fn with_use_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.use_date_pattern = pattern.into();
        self
    }

    /// Replace the markup description.
    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }
}

/// Class tokens and attribute names of the statement page.
///
/// Class tokens are matched as substrings of an element's `class` attribute,
/// so `posting-text` also matches `posting-text-wide`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    /// `div` holding the name of the currently chosen account.
    pub chosen_account: String,
    /// `div` wrapping one account's name and number in the account picker.
    pub account_candidate: String,
    /// `div` with the account name inside a candidate.
    pub account_name: String,
    /// `div` with `"<reg> <number>"` inside a candidate.
    pub account_number: String,
    /// `ul` whose `div` children are the transaction rows.
    pub posting_list: String,
    /// `div` with the compact post date.
    pub post_date: String,
    /// `div` with the posting text.
    pub text: String,
    /// `div` with the posting category.
    pub category: String,
    /// `div` with the posting amount.
    pub amount: String,
    /// `div` with the balance after the posting.
    pub balance: String,
    /// `input` checkbox marking the row as reconciled.
    pub reconciled: String,
    /// Attribute of the row's anchor carrying the use date.
    pub click_attribute: String,
    /// Attribute of the checkbox set when the row is reconciled.
    pub checked_attribute: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            chosen_account: "account-selector-chosen".to_string(),
            account_candidate: "account-selector-name-and-number".to_string(),
            account_name: "account-selector-account-name".to_string(),
            account_number: "account-selector-account-number".to_string(),
            posting_list: "old-postings".to_string(),
            post_date: "posting-date-compact".to_string(),
            text: "posting-text".to_string(),
            category: "posting-category".to_string(),
            amount: "posting-amount".to_string(),
            balance: "posting-balance".to_string(),
            reconciled: "js-table-checkbox".to_string(),
            click_attribute: "onclick".to_string(),
            checked_attribute: "checked".to_string(),
        }
    }
}
