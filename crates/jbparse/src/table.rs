//! Plain-text table rendering for transactions.

use jbparser_core::{MoneyFormat, Transaction};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Format of the use date column.
pub const USE_DATE_DISPLAY: &str = "%a, %d %b %Y %H:%M:%S";

/// Format of the post date column.
pub const POST_DATE_DISPLAY: &str = "%a, %d %b %Y";

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
    /// Pad on both sides.
    Center,
}

/// A column title and its alignment.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Header text.
    pub title: &'static str,
    /// Alignment of the header and every cell.
    pub align: Align,
}

const fn column(title: &'static str, align: Align) -> Column {
    Column { title, align }
}

/// Columns of the transaction table.
pub const TRANSACTION_COLUMNS: [Column; 10] = [
    column("Reg", Align::Left),
    column("Number", Align::Left),
    column("Account", Align::Left),
    column("UseDate", Align::Left),
    column("PostDate", Align::Left),
    column("Text", Align::Left),
    column("Category", Align::Left),
    column("Amount", Align::Right),
    column("Balance", Align::Right),
    column("Reconciled", Align::Center),
];

/// Render one transaction as table cells.
pub fn transaction_cells(txn: &Transaction, money: &MoneyFormat) -> Vec<String> {
    vec![
        txn.account.registration_number.to_string(),
        txn.account.account_number.to_string(),
        txn.account.name.clone(),
        txn.use_date.format(USE_DATE_DISPLAY).to_string(),
        txn.post_date.format(POST_DATE_DISPLAY).to_string(),
        txn.text.clone(),
        txn.category.clone(),
        money.format(txn.amount),
        money.format(txn.balance),
        if txn.reconciled { "x" } else { " " }.to_string(),
    ]
}

/// Write transactions as an aligned table followed by a row count.
pub fn write_transactions<W: Write>(
    transactions: &[Transaction],
    money: &MoneyFormat,
    writer: &mut W,
) -> io::Result<()> {
    let rows: Vec<_> = transactions
        .iter()
        .map(|txn| transaction_cells(txn, money))
        .collect();
    write_table(&TRANSACTION_COLUMNS, &rows, writer)
}

/// Write rows under the given columns.
///
/// Cells beyond the last column are ignored.
pub fn write_table<W: Write>(
    columns: &[Column],
    rows: &[Vec<String>],
    writer: &mut W,
) -> io::Result<()> {
    if columns.is_empty() {
        return Ok(());
    }

    // Terminal columns, so wide glyphs take two cells
    let mut widths: Vec<usize> = columns.iter().map(|c| c.title.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let titles: Vec<&str> = columns.iter().map(|c| c.title).collect();
    write_row(columns, &widths, &titles, writer)?;

    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            write!(writer, "  ")?;
        }
        write!(writer, "{}", "-".repeat(*width))?;
    }
    writeln!(writer)?;

    for row in rows {
        write_row(columns, &widths, row, writer)?;
    }

    writeln!(writer)?;
    writeln!(writer, "{} row(s)", rows.len())?;
    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(
    columns: &[Column],
    widths: &[usize],
    cells: &[S],
    writer: &mut W,
) -> io::Result<()> {
    let mut line = String::new();
    for (i, (col, width)) in columns.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let cell = cells.get(i).map_or("", AsRef::as_ref);
        let pad = width.saturating_sub(cell.width());
        let (left, right) = match col.align {
            Align::Left => (0, pad),
            Align::Right => (pad, 0),
            Align::Center => (pad / 2, pad - pad / 2),
        };
        line.extend(std::iter::repeat(' ').take(left));
        line.push_str(cell);
        line.extend(std::iter::repeat(' ').take(right));
    }
    writeln!(writer, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use jbparser_core::{AccountInfo, Money};

    fn txn(amount: i64, reconciled: bool) -> Transaction {
        Transaction {
            use_date: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2023, 9, 1, 13, 45, 12)
                .unwrap(),
            post_date: NaiveDate::from_ymd_opt(2023, 9, 4).unwrap(),
            account: AccountInfo::new("Budget", 7890, 1_234_567),
            text: "Netto".to_string(),
            category: "Food".to_string(),
            amount: Money::from_minor(amount),
            balance: Money::from_minor(1_000_000),
            reconciled,
        }
    }

    fn render(transactions: &[Transaction]) -> String {
        let mut out = Vec::new();
        write_transactions(transactions, &MoneyFormat::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_transaction_cells() {
        let cells = transaction_cells(&txn(-123_456, true), &MoneyFormat::default());
        assert_eq!(
            cells,
            vec![
                "7890",
                "1234567",
                "Budget",
                "Fri, 01 Sep 2023 13:45:12",
                "Mon, 04 Sep 2023",
                "Netto",
                "Food",
                "-1.234,56",
                "10.000,00",
                "x",
            ]
        );
        let cells = transaction_cells(&txn(0, false), &MoneyFormat::default());
        assert_eq!(cells[9], " ");
    }

    #[test]
    fn test_write_table_alignment() {
        let columns = [
            column("Name", Align::Left),
            column("Amount", Align::Right),
            column("Ok", Align::Center),
        ];
        let rows = vec![
            vec!["a".to_string(), "1,00".to_string(), "x".to_string()],
            vec!["Nørre".to_string(), "-12,50".to_string(), " ".to_string()],
        ];
        let mut out = Vec::new();
        write_table(&columns, &rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Name   Amount  Ok");
        assert_eq!(lines[1], "-----  ------  --");
        assert_eq!(lines[2], "a        1,00  x");
        assert_eq!(lines[3], "Nørre  -12,50");
        assert_eq!(lines[5], "2 row(s)");
    }

    #[test]
    fn test_write_table_wide_glyphs() {
        let columns = [column("Text", Align::Left), column("Amount", Align::Right)];
        let rows = vec![
            vec!["東京".to_string(), "1,00".to_string()],
            vec!["Tokyo".to_string(), "2,00".to_string()],
        ];
        let mut out = Vec::new();
        write_table(&columns, &rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "-----  ------");
        assert_eq!(lines[2], "東京     1,00");
        assert_eq!(lines[3], "Tokyo    2,00");
        assert_eq!(lines[2].width(), lines[3].width());
    }

    #[test]
    fn test_write_transactions_header_and_count() {
        let text = render(&[txn(-5, true), txn(500, false)]);
        let header = text.lines().next().unwrap();
        for col in &TRANSACTION_COLUMNS {
            assert!(header.contains(col.title), "{header}");
        }
        assert!(text.contains("-0,05"));
        assert!(text.ends_with("2 row(s)\n"));
    }

    #[test]
    fn test_write_transactions_empty() {
        let text = render(&[]);
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with("0 row(s)\n"));
    }
}
