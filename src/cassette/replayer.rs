//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Hands out a cassette's interactions, one queue per port/method pair.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Indexes the interactions of `cassette` by port and method.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Number of interactions not yet served for `port`/`method`.
    #[must_use]
    pub fn remaining(&self, port: &str, method: &str) -> usize {
        self.queues.get(&(port.to_string(), method.to_string())).map_or(0, VecDeque::len)
    }

    /// Takes the next interaction recorded for `port`/`method`.
    ///
    /// # Panics
    ///
    /// Panics if nothing was recorded for the pair, or if every recorded
    /// interaction for it has already been served.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };
        queue.pop_front().unwrap_or_else(|| {
            panic!(
                "Cassette exhausted: every interaction for port={port:?} method={method:?} \
                 has been consumed"
            )
        })
    }
}
