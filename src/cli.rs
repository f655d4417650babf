//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `subshell`.
#[derive(Debug, Parser)]
#[command(name = "subshell", version, about = "Run a command in the platform shell")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a shell command with this terminal's stdin, stdout and stderr.
    Run {
        /// Command words, joined with single spaces before being handed to the shell.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Print the program and arguments `run` would launch, without running them.
    Invocation {
        /// Command words, joined with single spaces.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

impl Command {
    /// The command line to hand to the shell.
    #[must_use]
    pub fn command_line(&self) -> String {
        match self {
            Self::Run { command } | Self::Invocation { command } => command.join(" "),
        }
    }
}
