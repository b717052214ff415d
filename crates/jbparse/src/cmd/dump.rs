//! `jbparse dump` - print the transactions of a saved netbank page.
//!
//! # Usage
//!
//! ```bash
//! jbparse dump statement.html
//! jbparse dump statement.html -n 10 --reverse
//! jbparse dump --format json < statement.html
//! jbparse dump   # paste the page, finish with </html> or Ctrl-X
//! ```

use crate::input;
use crate::table;
use anyhow::{Context, Result};
use chrono::FixedOffset;
use clap::{Args, ValueEnum};
use jbparser_core::{AccountStatement, MoneyFormat, Transaction};
use jbparser_page::{PageConfig, StatementParser};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Arguments of the dump command.
#[derive(Args, Debug, Clone, Default)]
pub struct DumpArgs {
    /// Saved netbank page; paste it on stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Rows to show: N > 0 keeps the first N, N < 0 the last |N|, 0 all
    #[arg(
        short = 'n',
        long = "times",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub times: i64,

    /// Reverse the selected rows
    #[arg(short, long)]
    pub reverse: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Offset in seconds east of UTC the page dates are read in
    #[arg(
        long,
        value_name = "SECONDS",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-86_399..=86_399)
    )]
    pub utc_offset: Option<i32>,

    /// strftime-style format of the timestamp in the row's click handler
    #[arg(long, value_name = "FORMAT")]
    pub use_date_format: Option<String>,

    /// strftime-style format of the compact post date
    #[arg(long, value_name = "FORMAT")]
    pub post_date_format: Option<String>,
}

/// Output format for the dump command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table (default)
    #[default]
    Text,
    /// The statement as JSON
    Json,
}

impl DumpArgs {
    /// Build the extraction configuration from the override flags.
    pub fn page_config(&self) -> Result<PageConfig> {
        let mut config = PageConfig::default();
        if let Some(seconds) = self.utc_offset {
            let offset = FixedOffset::east_opt(seconds)
                .with_context(|| format!("UTC offset {seconds}s is out of range"))?;
            config = config.with_offset(offset);
        }
        if let Some(format) = &self.use_date_format {
            config = config.with_use_date_format(format);
        }
        if let Some(format) = &self.post_date_format {
            config = config.with_post_date_format(format);
        }
        Ok(config)
    }
}

/// Keep the requested window of rows, optionally reversed.
pub fn select_transactions(statement: &AccountStatement, times: i64, reverse: bool) -> Vec<Transaction> {
    let mut rows = statement.window(times).to_vec();
    if reverse {
        rows.reverse();
    }
    rows
}

/// Load the statement from the file, or from a paste on stdin.
pub fn load_statement(args: &DumpArgs, parser: &StatementParser) -> Result<AccountStatement> {
    if let Some(path) = &args.file {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        return parser
            .parse(file)
            .with_context(|| format!("failed to parse {}", path.display()));
    }

    let page = input::prompt_and_read(io::stdin().lock(), &mut io::stderr())
        .context("failed to read pasted page")?;
    debug!("Read {} bytes from stdin", page.len());
    parser
        .parse(page.as_slice())
        .context("failed to parse pasted page")
}

/// Write the selected rows of a statement in the requested format.
pub fn write_statement<W: Write>(
    statement: &AccountStatement,
    args: &DumpArgs,
    writer: &mut W,
) -> Result<()> {
    let transactions = select_transactions(statement, args.times, args.reverse);
    match args.format {
        OutputFormat::Text => {
            table::write_transactions(&transactions, &MoneyFormat::default(), writer)?;
        }
        OutputFormat::Json => {
            let selected = AccountStatement {
                info: statement.info.clone(),
                transactions,
            };
            writeln!(writer, "{}", serde_json::to_string_pretty(&selected)?)?;
        }
    }
    Ok(())
}

/// Run the dump command.
pub fn run(args: &DumpArgs) -> Result<()> {
    let config = args.page_config()?;
    let parser = StatementParser::new(&config).context("invalid page configuration")?;
    let statement = load_statement(args, &parser)?;
    debug!(
        "Loaded {} transactions for {}",
        statement.len(),
        statement.info
    );

    let mut stdout = io::stdout().lock();
    write_statement(&statement, args, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
