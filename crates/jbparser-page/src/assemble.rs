//! Building an [`AccountStatement`] from a loaded page.

use crate::account::resolve_account;
use crate::config::PageConfig;
use crate::error::Result;
use crate::extract::FieldExtractor;
use crate::loader;
use crate::locate::Locator;
use jbparser_core::AccountStatement;
use scraper::Html;
use std::io::Read;
use tracing::debug;

/// Statement parser holding the selectors and pattern compiled from a
/// [`PageConfig`].
///
/// Compiling is the only fallible setup step, so a parser can be built once
/// and reused across pages.
#[derive(Debug)]
pub struct StatementParser {
    locator: Locator,
    fields: FieldExtractor,
}

impl StatementParser {
    /// Compile a parser for the given configuration.
    pub fn new(config: &PageConfig) -> Result<Self> {
        Ok(Self {
            locator: Locator::new(&config.markup)?,
            fields: FieldExtractor::new(config)?,
        })
    }

    /// Read a page from `reader` and parse it.
    pub fn parse<R: Read>(&self, reader: R) -> Result<AccountStatement> {
        self.parse_html(&loader::load(reader)?)
    }

    /// Parse a page held in memory.
    pub fn parse_str(&self, content: &str) -> Result<AccountStatement> {
        self.parse_html(&loader::load_str(content))
    }

    /// Parse an already loaded page.
    ///
    /// The account is resolved once and shared by every row. The first row
    /// that fails aborts the parse; a page without rows is a valid, empty
    /// statement.
    pub fn parse_html(&self, root: &Html) -> Result<AccountStatement> {
        let info = resolve_account(&self.locator, root)?;
        let rows = self.locator.transaction_rows(root);

        let transactions = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                self.fields.transaction(row, &info).map_err(|e| {
                    debug!("Row {index} failed: {e}");
                    e
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Parsed {} transactions for {}",
            transactions.len(),
            info.name
        );
        Ok(AccountStatement { info, transactions })
    }
}
