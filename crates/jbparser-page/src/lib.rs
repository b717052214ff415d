//! Account statement extraction for the bank's netbank pages.
//!
//! The netbank shows an account's postings as an HTML page. This crate reads
//! such a page and produces a [`jbparser_core::AccountStatement`]: the chosen
//! account plus one [`jbparser_core::Transaction`] per posting row.
//!
//! # Overview
//!
//! Extraction runs in four steps over an immutable HTML tree:
//!
//! - [`loader`] - Read the byte stream and build the tree
//! - [`locate`] - Find the account picker and the posting rows
//! - [`account`] - Resolve the chosen account's registration and number
//! - [`extract`] - Read the fields of each posting row
//!
//! [`StatementParser`] ties them together. Any failure aborts the parse; a
//! statement is only returned when every row was read.
//!
//! # Example
//!
//! ```rust,no_run
//! use jbparser_page::{parse, PageConfig};
//! use std::fs::File;
//!
//! let file = File::open("statement.html")?;
//! let statement = parse(file, &PageConfig::default())?;
//! for txn in &statement.transactions {
//!     println!("{} {} {}", txn.post_date, txn.text, txn.amount);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod account;
pub mod assemble;
pub mod config;
pub mod error;
pub mod extract;
pub mod loader;
pub mod locate;

use jbparser_core::AccountStatement;
use scraper::Html;
use std::io::Read;

pub use account::{resolve_account, split_account_number};
pub use assemble::StatementParser;
pub use config::{Markup, PageConfig};
pub use error::{Field, PageError, Result, Target};
pub use extract::FieldExtractor;
pub use locate::Locator;

/// Read a page from `reader` and extract its statement.
pub fn parse<R: Read>(reader: R, config: &PageConfig) -> Result<AccountStatement> {
    StatementParser::new(config)?.parse(reader)
}

/// Extract the statement from page content held in memory.
pub fn parse_str(content: &str, config: &PageConfig) -> Result<AccountStatement> {
    StatementParser::new(config)?.parse_str(content)
}

/// Extract the statement from an already loaded page.
pub fn parse_html(root: &Html, config: &PageConfig) -> Result<AccountStatement> {
    StatementParser::new(config)?.parse_html(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_login_page() {
        let err = parse_str("<html><body>Log in</body></html>", &PageConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "can't locate account label");
    }

    #[test]
    fn test_invalid_config_fails_before_reading() {
        let config = PageConfig::default().with_use_date_pattern("no group");
        let err = parse("<html></html>".as_bytes(), &config).unwrap_err();
        assert!(matches!(err, PageError::InvalidPattern { .. }));
    }
}
