//! Running a command string through the platform shell.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::adapters::live::process::LiveProcessLauncher;
use crate::error::RunError;
use crate::platform::{invocation, Platform};
use crate::ports::process::{ProcessExit, ProcessLauncher};

/// Runs `command` in the platform shell with inherited stdio.
///
/// The child is spawned before this returns; the handle resolves to
/// `Ok(())` when it exits with code zero. `command` is handed to the shell
/// verbatim with no escaping, so it must come from a trusted source.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn run_command(command: &str) -> CommandHandle {
    CommandRunner::live().run(command)
}

/// Launches shell commands through a [`ProcessLauncher`].
#[derive(Clone)]
pub struct CommandRunner {
    launcher: Arc<dyn ProcessLauncher>,
    platform: Platform,
}

impl CommandRunner {
    /// Creates a runner that builds invocations for `platform` and starts
    /// them with `launcher`.
    #[must_use]
    pub fn new(launcher: Arc<dyn ProcessLauncher>, platform: Platform) -> Self {
        Self { launcher, platform }
    }

    /// A runner that spawns real processes for the current platform.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Arc::new(LiveProcessLauncher), Platform::current())
    }

    /// Starts `command` and returns a handle that settles once it finishes.
    ///
    /// Dropping the handle does not stop the child.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn run(&self, command: &str) -> CommandHandle {
        let invocation = invocation(self.platform, command);
        tracing::debug!(%invocation, "running command");
        let pending = self.launcher.launch(&invocation);
        let task = tokio::spawn(async move { settle(pending.await) });
        CommandHandle { task }
    }
}

fn settle(result: Result<ProcessExit, io::Error>) -> Result<(), RunError> {
    let exit = result?;
    tracing::debug!(code = exit.code, "command finished");
    if exit.success() {
        Ok(())
    } else {
        Err(RunError::NonZeroExit { code: exit.code })
    }
}

/// Pending result of a [`CommandRunner::run`] call.
///
/// Resolves exactly once, to `Ok(())` or a [`RunError`].
#[must_use = "the command runs regardless, but its result is lost unless awaited"]
pub struct CommandHandle {
    task: JoinHandle<Result<(), RunError>>,
}

impl CommandHandle {
    /// Whether the command has already settled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Future for CommandHandle {
    type Output = Result<(), RunError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.task).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(err)) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Poll::Ready(Err(err)) => Poll::Ready(Err(RunError::Launch(io::Error::other(err)))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::platform::Invocation;
    use crate::ports::process::LaunchFuture;

    /// Records what it was asked to launch and answers with a canned result.
    struct FakeLauncher {
        launched: Mutex<Vec<Invocation>>,
        outcome: fn() -> Result<ProcessExit, io::Error>,
    }

    impl FakeLauncher {
        fn new(outcome: fn() -> Result<ProcessExit, io::Error>) -> Arc<Self> {
            Arc::new(Self { launched: Mutex::new(Vec::new()), outcome })
        }

        fn launched(&self) -> Vec<Invocation> {
            self.launched.lock().unwrap().clone()
        }
    }

    impl ProcessLauncher for FakeLauncher {
        fn launch(&self, invocation: &Invocation) -> LaunchFuture {
            self.launched.lock().unwrap().push(invocation.clone());
            Box::pin(std::future::ready((self.outcome)()))
        }
    }

    fn exits_with(code: i32) -> Result<ProcessExit, io::Error> {
        Ok(ProcessExit::with_code(code))
    }

    #[tokio::test]
    async fn zero_exit_resolves_ok() {
        let launcher = FakeLauncher::new(|| exits_with(0));
        let runner = CommandRunner::new(launcher.clone(), Platform::Unix);
        runner.run("exit 0").await.unwrap();
    }

    #[tokio::test]
    async fn non_zero_exit_fails_with_code() {
        let launcher = FakeLauncher::new(|| exits_with(7));
        let runner = CommandRunner::new(launcher, Platform::Unix);
        let err = runner.run("exit 7").await.unwrap_err();
        assert_eq!(err.to_string(), "Child process exited with code 7");
        assert_eq!(err.exit_code(), Some(7));
    }

    #[tokio::test]
    async fn launch_failure_is_not_an_exit_failure() {
        let launcher =
            FakeLauncher::new(|| Err(io::Error::new(io::ErrorKind::NotFound, "shell missing")));
        let runner = CommandRunner::new(launcher, Platform::Unix);
        let err = runner.run("anything").await.unwrap_err();
        assert!(err.is_launch_failure());
        assert_eq!(err.to_string(), "shell missing");
    }

    #[tokio::test]
    async fn builds_windows_invocation() {
        let launcher = FakeLauncher::new(|| exits_with(0));
        let runner = CommandRunner::new(launcher.clone(), Platform::Windows);
        runner.run("dir").await.unwrap();
        assert_eq!(
            launcher.launched(),
            vec![Invocation {
                program: "cmd.exe".into(),
                args: vec!["/s".into(), "/c".into(), "\"dir\"".into()],
            }]
        );
    }

    #[tokio::test]
    async fn launches_once_per_run() {
        let launcher = FakeLauncher::new(|| exits_with(0));
        let runner = CommandRunner::new(launcher.clone(), Platform::Unix);
        let first = runner.run("echo a");
        let second = runner.run("echo b");
        // Spawning happens in run(), before either handle is polled.
        assert_eq!(launcher.launched().len(), 2);
        first.await.unwrap();
        second.await.unwrap();
        assert_eq!(launcher.launched().len(), 2);
        assert_eq!(launcher.launched()[1].args, vec!["-c", "echo b"]);
    }

    #[tokio::test]
    async fn launch_error_settles_once() {
        let launcher =
            FakeLauncher::new(|| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));
        let runner = CommandRunner::new(launcher.clone(), Platform::Unix);
        let mut handle = runner.run("exit 0");

        let err = (&mut handle).await.unwrap_err();
        assert!(err.is_launch_failure());
        assert!(handle.is_finished());
        assert_eq!(launcher.launched().len(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn live_runner_maps_exit_codes() {
        let runner = CommandRunner::live();
        runner.run("exit 0").await.unwrap();
        let err = runner.run("exit 3").await.unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
        run_command("echo hello").await.unwrap();
    }
}
