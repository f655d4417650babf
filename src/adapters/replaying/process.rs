//! Replaying adapter for the `ProcessLauncher` port.

use std::io;
use std::sync::{Mutex, PoisonError};

use crate::cassette::replayer::CassetteReplayer;
use crate::platform::Invocation;
use crate::ports::process::{LaunchFuture, ProcessExit, ProcessLauncher};

/// Answers launches from a cassette instead of spawning processes.
pub struct ReplayingProcessLauncher {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingProcessLauncher {
    /// Creates a replaying launcher from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

/// Reads a recorded `{"Ok": ...}` / `{"Err": "..."}` launch outcome.
fn extract_outcome(output: &serde_json::Value) -> Result<ProcessExit, io::Error> {
    if let Some(err) = output.get("Err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(io::Error::other(msg));
    }
    let value = output.get("Ok").unwrap_or(output);
    serde_json::from_value(value.clone()).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("process::launch: failed to deserialize: {e}"),
        )
    })
}

impl ProcessLauncher for ReplayingProcessLauncher {
    fn launch(&self, invocation: &Invocation) -> LaunchFuture {
        // Panic only after the guard is released so later calls see the same message.
        let next = {
            let mut replayer = self.replayer.lock().unwrap_or_else(PoisonError::into_inner);
            (replayer.remaining("process", "launch") > 0)
                .then(|| replayer.next_interaction("process", "launch"))
        };
        let Some(interaction) = next else {
            panic!("Cassette exhausted: no recorded process::launch left for `{invocation}`");
        };
        tracing::debug!(%invocation, seq = interaction.seq, "replaying launch");
        Box::pin(std::future::ready(extract_outcome(&interaction.output)))
    }
}
