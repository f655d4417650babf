//! Failure modes of a shell command run.

use thiserror::Error;

/// Why a command did not succeed.
///
/// The two variants keep "never ran" apart from "ran and failed" so callers
/// can branch on them instead of parsing messages.
#[derive(Debug, Error)]
pub enum RunError {
    /// The shell could not be started, or waiting on it hit an OS error.
    #[error(transparent)]
    Launch(#[from] std::io::Error),

    /// The shell ran and finished with a status other than zero.
    #[error("{}", describe_exit(*.code))]
    NonZeroExit {
        /// Exit code, or `None` when the process ended without one
        /// (for example when killed by a signal).
        code: Option<i32>,
    },
}

impl RunError {
    /// The child's exit code, if it ran and reported one.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Launch(_) => None,
            Self::NonZeroExit { code } => *code,
        }
    }

    /// Whether the child process never got to run.
    #[must_use]
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, Self::Launch(_))
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("Child process exited with code {code}"),
        None => "Child process exited without an exit code".to_string(),
    }
}
