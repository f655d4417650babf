//! Accumulates interactions and writes them out as a cassette.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Collects interactions in memory until [`finish`](Self::finish) writes them.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    commit: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Creates an empty recorder that will write to `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            commit: commit.into(),
            interactions: Vec::new(),
        }
    }

    /// Appends an interaction, numbering it after the previous one.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.reserve(port, method, input);
        self.complete(seq, output);
    }

    /// Appends an interaction whose output is not known yet and returns its
    /// `seq`. The output stays `null` until [`complete`](Self::complete).
    ///
    /// Calls that overlap keep the order they were made in, not the order
    /// they finish in.
    pub fn reserve(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
    ) -> u64 {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output: serde_json::Value::Null,
        });
        seq
    }

    /// Fills in the output of a reserved interaction.
    ///
    /// An unknown `seq` is ignored.
    pub fn complete(&mut self, seq: u64, output: serde_json::Value) {
        let slot = usize::try_from(seq).ok().and_then(|i| self.interactions.get_mut(i));
        if let Some(interaction) = slot {
            interaction.output = output;
        }
    }

    /// Writes the cassette as YAML and returns the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            commit: self.commit,
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
