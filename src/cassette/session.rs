//! A recording session that owns the process cassette.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// File name of the process-launch cassette inside a session directory.
pub const PROCESS_CASSETTE: &str = "process.cassette.yaml";

/// Owns the recorder shared with recording adapters for one run.
pub struct RecordingSession {
    /// Recorder for process launches.
    pub process: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Creates `dir` (and parents) and a recorder writing into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, String> {
        let output_dir = dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            format!("Failed to create cassette directory {}: {e}", output_dir.display())
        })?;

        let name = format!("{}-process", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let recorder =
            CassetteRecorder::new(output_dir.join(PROCESS_CASSETTE), name, commit_hash());
        Ok(Self { process: Arc::new(Mutex::new(recorder)), output_dir })
    }

    /// Writes the cassette and returns the session directory.
    ///
    /// Every adapter holding the recorder must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder is still shared or the write fails.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.process)
            .map_err(|_| "Recording adapter for process still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for process poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write process cassette: {e}"))?;
        Ok(self.output_dir)
    }
}

/// Current git `HEAD`, or `"unknown"` outside a repository.
fn commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    hash.unwrap_or_else(|| {
        tracing::warn!("could not read git commit hash, recording 'unknown'");
        "unknown".to_string()
    })
}
