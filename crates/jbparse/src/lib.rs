//! Command line tool for netbank statement pages.
//!
//! - `jbparse dump FILE`: Print the transactions of a saved page
//! - `jbparse dump`: Paste the page into the terminal instead
//!
//! # Example Usage
//!
//! ```bash
//! jbparse dump statement.html
//! jbparse dump statement.html --times -5 --reverse
//! jbparse dump statement.html --format json --utc-offset 7200
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod input;
pub mod table;
