//! Resolving which account a page shows.

use crate::error::{PageError, Result, Target};
use crate::locate::{find_first_descendant, inner_text, Locator};
use jbparser_core::AccountInfo;
use scraper::Html;
use tracing::debug;

/// Find the chosen account among the picker's candidates.
///
/// The chosen label's trimmed text is compared exactly against each
/// candidate's name; the first match wins and its number field is split into
/// registration and account number. Candidates without a name element are
/// skipped.
pub fn resolve_account(locator: &Locator, root: &Html) -> Result<AccountInfo> {
    let name = inner_text(locator.account_selector_label(root)?);
    debug!("Chosen account is {name:?}");

    let candidate = locator
        .account_candidates(root)?
        .into_iter()
        .find(|candidate| {
            find_first_descendant(*candidate, &locator.account_name)
                .is_some_and(|el| inner_text(el) == name)
        })
        .ok_or(PageError::NotFound(Target::Account))?;

    let number = find_first_descendant(candidate, &locator.account_number)
        .map(inner_text)
        .ok_or(PageError::NotFound(Target::Account))?;

    let (registration_number, account_number) =
        split_account_number(&number).ok_or(PageError::NotFound(Target::Account))?;

    Ok(AccountInfo::new(name, registration_number, account_number))
}

/// Split `"<reg> <number>"` on single spaces into its two parts.
///
/// Returns `None` unless there are exactly two tokens that both parse as
/// `u64`.
pub fn split_account_number(raw: &str) -> Option<(u64, u64)> {
    let mut tokens = raw.split(' ');
    let reg = tokens.next()?.parse().ok()?;
    let number = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((reg, number))
}
