//! Structural queries over the statement page.
//!
//! Elements are recognised by tag name plus a token contained in their
//! `class` attribute (`tag[class*="token"]`). Wherever more than one element
//! matches and only one is wanted, the first in document order wins.

use crate::config::Markup;
use crate::error::{PageError, Result, Target};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Compile a selector for `tag` elements whose class contains `token`.
pub fn class_selector(tag: &str, token: &str) -> Result<Selector> {
    let selector = format!("{tag}[class*=\"{token}\"]");
    Selector::parse(&selector).map_err(|e| PageError::InvalidSelector {
        reason: e.to_string(),
        selector: selector.clone(),
    })
}

/// Compile a plain tag selector.
pub(crate) fn tag_selector(tag: &str) -> Result<Selector> {
    Selector::parse(tag).map_err(|e| PageError::InvalidSelector {
        selector: tag.to_string(),
        reason: e.to_string(),
    })
}

/// First proper descendant of `fragment` matching `selector`.
///
/// The fragment itself is never returned, even when it matches.
pub fn find_first_descendant<'a>(
    fragment: ElementRef<'a>,
    selector: &Selector,
) -> Option<ElementRef<'a>> {
    fragment.select(selector).find(|el| el.id() != fragment.id())
}

/// Rendered text of an element with surrounding whitespace removed.
pub fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Page-level queries compiled from a [`Markup`].
#[derive(Debug)]
pub struct Locator {
    chosen_account: Selector,
    account_candidate: Selector,
    pub(crate) account_name: Selector,
    pub(crate) account_number: Selector,
    posting_list: Selector,
}

impl Locator {
    /// Compile the page-level selectors.
    pub fn new(markup: &Markup) -> Result<Self> {
        Ok(Self {
            chosen_account: class_selector("div", &markup.chosen_account)?,
            account_candidate: class_selector("div", &markup.account_candidate)?,
            account_name: class_selector("div", &markup.account_name)?,
            account_number: class_selector("div", &markup.account_number)?,
            posting_list: class_selector("ul", &markup.posting_list)?,
        })
    }

    /// The element naming the currently chosen account.
    pub fn account_selector_label<'a>(&self, root: &'a Html) -> Result<ElementRef<'a>> {
        root.select(&self.chosen_account)
            .next()
            .ok_or(PageError::NotFound(Target::AccountLabel))
    }

    /// Every account listed in the account picker, in document order.
    pub fn account_candidates<'a>(&self, root: &'a Html) -> Result<Vec<ElementRef<'a>>> {
        let candidates: Vec<_> = root.select(&self.account_candidate).collect();
        if candidates.is_empty() {
            return Err(PageError::NotFound(Target::AccountCandidates));
        }
        debug!("Found {} account candidates", candidates.len());
        Ok(candidates)
    }

    /// The `div` children of the first posting list, in document order.
    ///
    /// A page without a posting list yields no rows rather than an error.
    pub fn transaction_rows<'a>(&self, root: &'a Html) -> Vec<ElementRef<'a>> {
        let Some(list) = root.select(&self.posting_list).next() else {
            warn!("No posting list on page, treating it as empty");
            return Vec::new();
        };

        let rows: Vec<_> = list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "div")
            .collect();
        debug!("Found {} transaction rows", rows.len());
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> Locator {
        Locator::new(&Markup::default()).unwrap()
    }

    #[test]
    fn test_class_selector_matches_substring() {
        let html = Html::parse_document(
            r#"<div class="x posting-text-wide">wide</div><span class="posting-text">span</span>"#,
        );
        let selector = class_selector("div", "posting-text").unwrap();
        let found: Vec<_> = html.select(&selector).map(inner_text).collect();
        assert_eq!(found, vec!["wide"]);
    }

    #[test]
    fn test_class_selector_invalid() {
        let err = class_selector("div", "bad\"token").unwrap_err();
        assert!(matches!(err, PageError::InvalidSelector { .. }));
    }

    #[test]
    fn test_find_first_descendant_skips_self() {
        let html = Html::parse_document(
            r#"<div class="posting-text outer"><p>x</p><div class="posting-text inner">a</div><div class="posting-text">b</div></div>"#,
        );
        let outer = html
            .select(&Selector::parse("div.outer").unwrap())
            .next()
            .unwrap();
        let selector = class_selector("div", "posting-text").unwrap();
        let first = find_first_descendant(outer, &selector).unwrap();
        assert_eq!(inner_text(first), "a");

        let missing = class_selector("div", "posting-amount").unwrap();
        assert!(find_first_descendant(outer, &missing).is_none());
    }

    #[test]
    fn test_inner_text_trims_nested_text() {
        let html = Html::parse_document("<div class=\"t\">\n   Netto <b>Foods</b>\n  </div>");
        let el = html.select(&Selector::parse("div.t").unwrap()).next().unwrap();
        assert_eq!(inner_text(el), "Netto Foods");
    }

    #[test]
    fn test_account_label_first_match() {
        let html = Html::parse_document(
            r#"<div class="account-selector-chosen">Budget</div><div class="account-selector-chosen">Other</div>"#,
        );
        let label = locator().account_selector_label(&html).unwrap();
        assert_eq!(inner_text(label), "Budget");
    }

    #[test]
    fn test_account_label_missing() {
        let html = Html::parse_document("<div>nothing</div>");
        let err = locator().account_selector_label(&html).unwrap_err();
        assert!(matches!(err, PageError::NotFound(Target::AccountLabel)));
    }

    #[test]
    fn test_account_candidates_missing() {
        let html = Html::parse_document("<div class=\"account-selector-chosen\">Budget</div>");
        let err = locator().account_candidates(&html).unwrap_err();
        assert!(matches!(err, PageError::NotFound(Target::AccountCandidates)));
    }

    #[test]
    fn test_transaction_rows_first_list_only() {
        let html = Html::parse_document(
            r#"<ul class="old-postings">
                 <div class="row">1</div>
                 <li>skip</li>
                 <div class="row">2</div>
               </ul>
               <ul class="old-postings"><div class="row">3</div></ul>"#,
        );
        let rows: Vec<_> = locator()
            .transaction_rows(&html)
            .into_iter()
            .map(inner_text)
            .collect();
        assert_eq!(rows, vec!["1", "2"]);
    }

    #[test]
    fn test_transaction_rows_immediate_children_only() {
        let html = Html::parse_document(
            r#"<ul class="old-postings"><div class="row"><div class="nested">n</div>1</div></ul>"#,
        );
        assert_eq!(locator().transaction_rows(&html).len(), 1);
    }

    #[test]
    fn test_transaction_rows_empty_or_absent() {
        let empty = Html::parse_document(r#"<ul class="old-postings"></ul>"#);
        assert!(locator().transaction_rows(&empty).is_empty());

        let absent = Html::parse_document("<p>no list</p>");
        assert!(locator().transaction_rows(&absent).is_empty());
    }
}
