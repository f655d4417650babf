//! Environment-driven configuration for the `subshell` binary.

use std::path::PathBuf;

/// Directory to record process launches into.
pub const RECORD_VAR: &str = "SUBSHELL_RECORD";
/// Cassette file to replay process launches from.
pub const REPLAY_VAR: &str = "SUBSHELL_REPLAY";
/// Tracing filter directive.
pub const LOG_VAR: &str = "SUBSHELL_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where to record launches, if recording.
    pub record: Option<PathBuf>,
    /// Which cassette to replay, if replaying.
    pub replay: Option<PathBuf>,
    /// Filter passed to the tracing subscriber.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { record: None, replay: None, log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if recording and replaying are both requested.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if recording and replaying are both requested.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let config = Self {
            record: get(RECORD_VAR).map(PathBuf::from),
            replay: get(REPLAY_VAR).map(PathBuf::from),
            log_filter: get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };

        if config.record.is_some() && config.replay.is_some() {
            return Err(format!("{RECORD_VAR} and {REPLAY_VAR} cannot be set at the same time"));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("SUBSHELL_RECORD", "/tmp/cassettes"),
            ("SUBSHELL_LOG", "subshell=debug"),
        ]))
        .unwrap();
        assert_eq!(config.record, Some(PathBuf::from("/tmp/cassettes")));
        assert_eq!(config.replay, None);
        assert_eq!(config.log_filter, "subshell=debug");
    }

    #[test]
    fn empty_values_are_ignored() {
        let config =
            Config::from_lookup(lookup(&[("SUBSHELL_REPLAY", ""), ("SUBSHELL_LOG", "")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn record_and_replay_conflict() {
        let err = Config::from_lookup(lookup(&[
            ("SUBSHELL_RECORD", "/a"),
            ("SUBSHELL_REPLAY", "/b"),
        ]))
        .unwrap_err();
        assert!(err.contains("cannot be set at the same time"));
    }
}
