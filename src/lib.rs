//! Run shell commands with inherited stdio and await their exit status.
//!
//! [`run_command`] hands a command string to `/bin/sh -c` (or
//! `cmd.exe /s /c` on Windows), wires the child to this process's stdin,
//! stdout and stderr, and returns a [`CommandHandle`] that resolves once the
//! child exits.
//!
//! ```no_run
//! # async fn demo() -> Result<(), subshell::RunError> {
//! subshell::run_command("echo hello").await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod platform;
pub mod ports;
pub mod runner;

pub use error::RunError;
pub use platform::{invocation, Invocation, Platform};
pub use runner::{run_command, CommandHandle, CommandRunner};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns a [`commands::Failure`] when argument parsing, configuration, or
/// the command itself fails.
pub fn run<I, T>(args: I) -> Result<(), commands::Failure>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => {
            let exit_code = u8::try_from(err.exit_code()).unwrap_or(2);
            return Err(commands::Failure { message: err.to_string(), exit_code });
        }
    };
    let config = config::Config::from_env()?;
    logging::init(&config.log_filter);
    commands::dispatch(&cli.command, &config)
}
