//! `subshell run`: run a command and exit with its status.

use super::Failure;
use crate::context::ServiceContext;
use crate::error::RunError;

/// Runs `command_line` on a single-threaded runtime using `ctx`.
///
/// # Errors
///
/// Returns a [`Failure`] when the runtime cannot start or the command fails.
pub fn run_with_context(ctx: &ServiceContext, command_line: &str) -> Result<(), Failure> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Failure::new(format!("Failed to start runtime: {e}")))?;

    let runner = ctx.runner();
    runtime.block_on(async move { runner.run(command_line).await }).map_err(to_failure)
}

/// Maps a run error to the status the CLI exits with.
///
/// Exit codes 1 to 255 pass through; anything else becomes 1.
fn to_failure(err: RunError) -> Failure {
    let exit_code = err.exit_code().and_then(|code| u8::try_from(code).ok()).filter(|c| *c != 0);
    Failure { message: err.to_string(), exit_code: exit_code.unwrap_or(1) }
}
