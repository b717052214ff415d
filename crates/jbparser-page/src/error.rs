//! Errors raised while extracting a statement.

use std::fmt;
use thiserror::Error;

/// Result type for page extraction.
pub type Result<T, E = PageError> = std::result::Result<T, E>;

/// Errors that can occur while extracting a statement.
///
/// Every error aborts the whole parse; no partial statement is returned.
#[derive(Debug, Error)]
pub enum PageError {
    /// A part of the page that must exist exactly once could not be located.
    #[error("can't locate {0}")]
    NotFound(Target),

    /// A row lacks the element a field is read from.
    #[error("can't locate {0}")]
    FieldMissing(Field),

    /// A row's element was found but its content could not be converted.
    #[error("can't read {field} from {raw:?}")]
    FieldMalformed {
        /// The field being extracted.
        field: Field,
        /// The text or attribute value that was rejected.
        raw: String,
    },

    /// A class token did not produce a valid CSS selector.
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector {
        /// The selector that failed to compile.
        selector: String,
        /// Why it failed.
        reason: String,
    },

    /// The use date pattern is not a usable regex.
    #[error("invalid use date pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// Why it failed.
        reason: String,
    },

    /// Reading the document failed.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

impl PageError {
    pub(crate) fn malformed(field: Field, raw: impl Into<String>) -> Self {
        Self::FieldMalformed {
            field,
            raw: raw.into(),
        }
    }
}

/// Page-level parts located once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The label naming the currently chosen account.
    AccountLabel,
    /// The list of accounts in the account picker.
    AccountCandidates,
    /// The picker entry matching the chosen account, with a valid number.
    Account,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountLabel => write!(f, "account label"),
            Self::AccountCandidates => write!(f, "account candidates"),
            Self::Account => write!(f, "account"),
        }
    }
}

/// Fields read from each transaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Timestamp from the row's click handler.
    UseDate,
    /// Compact booking date.
    PostDate,
    /// Posting text.
    Text,
    /// Posting category.
    Category,
    /// Reconciled checkbox.
    Reconciled,
    /// Posting amount.
    Amount,
    /// Balance after the posting.
    Balance,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UseDate => "use date",
            Self::PostDate => "post date",
            Self::Text => "text",
            Self::Category => "category",
            Self::Reconciled => "reconciled",
            Self::Amount => "amount",
            Self::Balance => "balance",
        };
        f.write_str(name)
    }
}
