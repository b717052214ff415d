//! Field extraction from a single transaction row.
//!
//! Each extractor reads one field of a row and returns either the typed value,
//! [`PageError::FieldMissing`] when the element holding it is absent, or
//! [`PageError::FieldMalformed`] when its content cannot be converted.

use crate::config::PageConfig;
use crate::error::{Field, PageError, Result};
use crate::locate::{class_selector, find_first_descendant, inner_text, tag_selector};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use jbparser_core::{AccountInfo, Money, Transaction};
use regex::Regex;
use scraper::{ElementRef, Selector};

/// Row-level extractors compiled from a [`PageConfig`].
#[derive(Debug)]
pub struct FieldExtractor {
    anchor: Selector,
    post_date: Selector,
    text: Selector,
    category: Selector,
    amount: Selector,
    balance: Selector,
    checkbox: Selector,
    click_attribute: String,
    checked_attribute: String,
    use_date_pattern: Regex,
    use_date_format: String,
    post_date_format: String,
    offset: FixedOffset,
}

impl FieldExtractor {
    /// Compile the row selectors and the use date pattern.
    pub fn new(config: &PageConfig) -> Result<Self> {
        let markup = &config.markup;
        let use_date_pattern =
            Regex::new(&config.use_date_pattern).map_err(|e| PageError::InvalidPattern {
                pattern: config.use_date_pattern.clone(),
                reason: e.to_string(),
            })?;
        if use_date_pattern.captures_len() < 2 {
            return Err(PageError::InvalidPattern {
                pattern: config.use_date_pattern.clone(),
                reason: "pattern needs a capture group for the timestamp".to_string(),
            });
        }

        Ok(Self {
            anchor: tag_selector("a")?,
            post_date: class_selector("div", &markup.post_date)?,
            text: class_selector("div", &markup.text)?,
            category: class_selector("div", &markup.category)?,
            amount: class_selector("div", &markup.amount)?,
            balance: class_selector("div", &markup.balance)?,
            checkbox: class_selector("input", &markup.reconciled)?,
            click_attribute: markup.click_attribute.clone(),
            checked_attribute: markup.checked_attribute.clone(),
            use_date_pattern,
            use_date_format: config.use_date_format.clone(),
            post_date_format: config.post_date_format.clone(),
            offset: config.offset,
        })
    }

    /// Build a transaction from a row, reading fields in a fixed order.
    ///
    /// The first field that fails aborts the row.
    pub fn transaction(&self, row: ElementRef<'_>, account: &AccountInfo) -> Result<Transaction> {
        let use_date = self.use_date(row)?;
        let post_date = self.post_date(row)?;
        let text = self.text(row)?;
        let amount = self.amount(row)?;
        let balance = self.balance(row)?;
        let reconciled = self.reconciled(row)?;
        let category = self.category(row)?;

        Ok(Transaction {
            use_date,
            post_date,
            account: account.clone(),
            text,
            amount,
            balance,
            category,
            reconciled,
        })
    }

    /// Timestamp embedded in the click handler of the row's first anchor.
    pub fn use_date(&self, row: ElementRef<'_>) -> Result<DateTime<FixedOffset>> {
        let raw = find_first_descendant(row, &self.anchor)
            .and_then(|a| a.value().attr(&self.click_attribute))
            .and_then(|handler| self.use_date_pattern.captures(handler))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or(PageError::FieldMissing(Field::UseDate))?;

        NaiveDateTime::parse_from_str(raw, &self.use_date_format)
            .ok()
            .and_then(|naive| naive.and_local_timezone(self.offset).single())
            .ok_or_else(|| PageError::malformed(Field::UseDate, raw))
    }

    /// Booking date from the compact date element.
    ///
    /// chrono's numeric specifiers accept unpadded values, so `4.9.2023`
    /// reads the same as `04.09.2023`.
    pub fn post_date(&self, row: ElementRef<'_>) -> Result<NaiveDate> {
        let raw = field_text(row, &self.post_date, Field::PostDate)?;
        NaiveDate::parse_from_str(&raw, &self.post_date_format)
            .map_err(|_| PageError::malformed(Field::PostDate, raw))
    }

    /// Posting text; may be empty.
    pub fn text(&self, row: ElementRef<'_>) -> Result<String> {
        field_text(row, &self.text, Field::Text)
    }

    /// Posting category; may be empty.
    pub fn category(&self, row: ElementRef<'_>) -> Result<String> {
        field_text(row, &self.category, Field::Category)
    }

    /// Whether the row's checkbox is ticked.
    ///
    /// Only the literal attribute value `checked` counts; a bare or empty
    /// attribute is read as unticked.
    pub fn reconciled(&self, row: ElementRef<'_>) -> Result<bool> {
        let checkbox = find_first_descendant(row, &self.checkbox)
            .ok_or(PageError::FieldMissing(Field::Reconciled))?;
        Ok(checkbox.value().attr(&self.checked_attribute) == Some("checked"))
    }

    /// Posting amount.
    pub fn amount(&self, row: ElementRef<'_>) -> Result<Money> {
        field_money(row, &self.amount, Field::Amount)
    }

    /// Balance after the posting.
    pub fn balance(&self, row: ElementRef<'_>) -> Result<Money> {
        field_money(row, &self.balance, Field::Balance)
    }
}

fn field_text(row: ElementRef<'_>, selector: &Selector, field: Field) -> Result<String> {
    find_first_descendant(row, selector)
        .map(inner_text)
        .ok_or(PageError::FieldMissing(field))
}

fn field_money(row: ElementRef<'_>, selector: &Selector, field: Field) -> Result<Money> {
    let raw = field_text(row, selector, field)?;
    Money::parse_grouped(&raw).map_err(|e| PageError::malformed(field, e.input))
}
