//! Core types for jbparser
//!
//! This crate provides the data model produced by the statement extractor:
//!
//! - [`AccountInfo`] - Name plus registration and account number of one account
//! - [`Transaction`] - One posting row of a statement
//! - [`AccountStatement`] - The account and its transactions, in page order
//! - [`Money`] - An exact amount stored as integer minor units
//! - [`MoneyFormat`] - Locale-style display of [`Money`] with grouped thousands
//!
//! # Example
//!
//! ```
//! use jbparser_core::{Money, MoneyFormat};
//!
//! let amount = Money::from_minor(-123_456);
//! assert_eq!(amount.minor_units(), -123_456);
//! assert_eq!(MoneyFormat::default().format(amount), "-1.234,56");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod format;
pub mod money;
pub mod statement;

pub use format::MoneyFormat;
pub use money::{Money, ParseMoneyError};
pub use statement::{AccountInfo, AccountStatement, Transaction};

// Re-export commonly used external types
pub use chrono::{DateTime, FixedOffset, NaiveDate};
pub use rust_decimal::Decimal;
