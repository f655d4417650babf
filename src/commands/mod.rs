//! Command dispatch and handlers.

pub mod invocation;
pub mod run;

use std::fmt;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;

/// A failed command: what to print and which status to exit with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Message for stderr.
    pub message: String,
    /// Process exit status, never zero.
    pub exit_code: u8,
}

impl Failure {
    /// A failure exiting with status 1.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), exit_code: 1 }
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Dispatch a parsed command to its handler.
///
/// With `SUBSHELL_RECORD` set, launches are recorded to a cassette in that
/// directory; with `SUBSHELL_REPLAY` set, they are answered from a cassette.
///
/// # Errors
///
/// Returns a [`Failure`] if the context cannot be built or the handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), Failure> {
    if let Command::Invocation { .. } = command {
        return invocation::run(&command.command_line());
    }

    let (ctx, session) = if let Some(dir) = &config.record {
        let (ctx, session) = ServiceContext::recording_at(dir)?;
        (ctx, Some(session))
    } else if let Some(path) = &config.replay {
        (ServiceContext::replaying(path)?, None)
    } else {
        (ServiceContext::live(), None)
    };

    let result = run::run_with_context(&ctx, &command.command_line());

    // Finish recording after the command completes, even on error.
    if let Some(session) = session {
        // The context holds the recorder through its launcher.
        drop(ctx);
        let dir = session.finish()?;
        eprintln!("Recording saved to: {}", dir.display());
    }

    result
}
