//! Service context wiring a process launcher for the current run.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::LiveProcessLauncher;
use crate::adapters::recording::RecordingProcessLauncher;
use crate::adapters::replaying::ReplayingProcessLauncher;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::platform::Platform;
use crate::ports::process::ProcessLauncher;
use crate::runner::CommandRunner;

/// Bundles the launcher and platform commands are run with.
///
/// Constructors pick the adapter: live, recording, or replaying.
pub struct ServiceContext {
    /// Launcher used to start shell invocations.
    pub launcher: Arc<dyn ProcessLauncher>,
    /// Platform invocations are built for.
    pub platform: Platform,
}

impl ServiceContext {
    /// A context that spawns real processes on the current platform.
    #[must_use]
    pub fn live() -> Self {
        Self { launcher: Arc::new(LiveProcessLauncher), platform: Platform::current() }
    }

    /// A live context whose launches are also recorded into `dir`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(dir: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::create(dir)?;
        let launcher = RecordingProcessLauncher::new(
            Arc::new(LiveProcessLauncher),
            Arc::clone(&session.process),
        );
        let ctx = Self { launcher: Arc::new(launcher), platform: Platform::current() };
        Ok((ctx, session))
    }

    /// A context answering launches from the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let launcher = ReplayingProcessLauncher::new(CassetteReplayer::new(&cassette));
        Ok(Self { launcher: Arc::new(launcher), platform: Platform::current() })
    }

    /// A runner using this context's launcher and platform.
    #[must_use]
    pub fn runner(&self) -> CommandRunner {
        CommandRunner::new(Arc::clone(&self.launcher), self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use crate::cassette::session::PROCESS_CASSETTE;
    use serde_json::json;

    #[tokio::test]
    async fn replaying_context_runs_without_spawning() {
        let dir = std::env::temp_dir().join("subshell_ctx_replay_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("replay.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "test", "abc");
        recorder.record("process", "launch", json!({}), json!({"Ok": {"code": 0}}));
        recorder.record("process", "launch", json!({}), json!({"Ok": {"code": 12}}));
        recorder.finish().unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        let runner = ctx.runner();
        runner.run("this-program-does-not-exist").await.unwrap();
        let err = runner.run("whatever").await.unwrap_err();
        assert_eq!(err.to_string(), "Child process exited with code 12");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_missing_cassette_fails() {
        let err = ServiceContext::replaying(Path::new("/nonexistent/c.yaml")).err().unwrap();
        assert!(err.contains("Failed to read cassette file"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn recording_context_writes_cassette_after_drop() {
        let dir = std::env::temp_dir().join("subshell_ctx_record_test");
        let _ = std::fs::remove_dir_all(&dir);

        let (ctx, session) = ServiceContext::recording_at(&dir).unwrap();
        let err = ctx.runner().run("exit 3").await.unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
        drop(ctx);

        session.finish().unwrap();
        let cassette = Cassette::load(&dir.join(PROCESS_CASSETTE)).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].output, json!({"Ok": {"code": 3}}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
