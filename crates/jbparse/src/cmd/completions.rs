//! Shell completion generation.

use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Shells completions can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellType {
    /// Bash
    Bash,
    /// Z shell
    Zsh,
    /// Friendly interactive shell
    Fish,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl From<ShellType> for Shell {
    fn from(shell: ShellType) -> Self {
        match shell {
            ShellType::Bash => Self::Bash,
            ShellType::Zsh => Self::Zsh,
            ShellType::Fish => Self::Fish,
            ShellType::PowerShell => Self::PowerShell,
            ShellType::Elvish => Self::Elvish,
        }
    }
}

/// Write the completion script for `C` to `writer`.
pub fn write_completions<C: CommandFactory, W: Write>(
    shell: ShellType,
    bin_name: &str,
    writer: &mut W,
) {
    let mut cmd = C::command();
    generate(Shell::from(shell), &mut cmd, bin_name, writer);
}

/// Print the completion script for `C` to stdout.
pub fn generate_completions<C: CommandFactory>(shell: ShellType, bin_name: &str) {
    write_completions::<C, _>(shell, bin_name, &mut io::stdout());
}
