//! The `jbparse` command line.

use crate::cmd::completions::ShellType;
use crate::cmd::dump::{self, DumpArgs};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Read account statements from saved netbank pages.
#[derive(Parser, Debug)]
#[command(name = "jbparse")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub generate_completions: Option<ShellType>,

    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the transactions of a page as a table or JSON
    Dump(DumpArgs),
}

/// Main entry point.
pub fn main() -> ExitCode {
    main_with_name("jbparse")
}

/// Main entry point with custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        crate::cmd::completions::generate_completions::<Cli>(shell, bin_name);
        return ExitCode::SUCCESS;
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .init();
    }

    let Some(command) = cli.command else {
        eprintln!("error: a command is required");
        eprintln!("For more information, try '--help'");
        return ExitCode::from(2);
    };

    let result = match command {
        Command::Dump(args) => dump::run(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
