//! Recording adapter for the `ProcessLauncher` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::{complete_result, reserve_interaction};
use crate::cassette::recorder::CassetteRecorder;
use crate::platform::Invocation;
use crate::ports::process::{LaunchFuture, ProcessLauncher};

/// Records each launch and its outcome while delegating to an inner launcher.
pub struct RecordingProcessLauncher {
    inner: Arc<dyn ProcessLauncher>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingProcessLauncher {
    /// Wraps `inner`, writing interactions to `recorder`.
    pub fn new(inner: Arc<dyn ProcessLauncher>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct LaunchInput {
    program: String,
    args: Vec<String>,
}

impl ProcessLauncher for RecordingProcessLauncher {
    fn launch(&self, invocation: &Invocation) -> LaunchFuture {
        let input =
            LaunchInput { program: invocation.program.clone(), args: invocation.args.clone() };
        // Replay serves launches in call order, so the slot is taken now.
        let seq = reserve_interaction(&self.recorder, "process", "launch", &input);
        let pending = self.inner.launch(invocation);
        let recorder = Arc::clone(&self.recorder);
        Box::pin(async move {
            let result = pending.await;
            if let Some(seq) = seq {
                complete_result(&recorder, seq, &result);
            }
            result
        })
    }
}
