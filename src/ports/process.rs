//! Process launcher port for starting shell invocations.

use std::future::Future;
use std::io;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::platform::Invocation;

/// Boxed future returned by [`ProcessLauncher::launch`].
///
/// It owns everything it needs so it can be moved onto a runtime task.
pub type LaunchFuture = Pin<Box<dyn Future<Output = Result<ProcessExit, io::Error>> + Send>>;

/// How a launched process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessExit {
    /// Exit code, or `None` if the process ended without one.
    pub code: Option<i32>,
}

impl ProcessExit {
    /// A process that exited with `code`.
    #[must_use]
    pub fn with_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Whether the process exited with code zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Starts processes with the caller's standard streams.
///
/// Abstracting the launch lets tests inject spawn failures and lets
/// recorded launches be replayed without running anything.
pub trait ProcessLauncher: Send + Sync {
    /// Starts `invocation` and returns a future that resolves when it ends.
    ///
    /// Implementations attempt the spawn before returning. A spawn failure
    /// is reported through the returned future, not by panicking.
    fn launch(&self, invocation: &Invocation) -> LaunchFuture;
}
