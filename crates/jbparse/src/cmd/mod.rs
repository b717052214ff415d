//! Command implementations for the CLI.
//!
//! The thin `jbparse` binary calls [`root::main`], which dispatches to the
//! subcommand modules.

pub mod completions;
pub mod dump;
pub mod root;
