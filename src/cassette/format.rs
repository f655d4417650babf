//! On-disk layout of a cassette.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One call made through a port, with what went in and what came back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, starting at zero.
    pub seq: u64,
    /// Port the call went through (e.g. `"process"`).
    pub port: String,
    /// Method called on the port (e.g. `"launch"`).
    pub method: String,
    /// Arguments of the call.
    pub input: serde_json::Value,
    /// Result of the call.
    pub output: serde_json::Value,
}

/// A named, timestamped sequence of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Name given at recording time.
    pub name: String,
    /// When the recording was written.
    pub recorded_at: DateTime<Utc>,
    /// Git commit of the working tree at recording time, or `"unknown"`.
    pub commit: String,
    /// Interactions in the order they happened.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid cassette.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Reads and parses the cassette file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the path if it cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hand_written_yaml() {
        let yaml = r#"
name: manual
recorded_at: 2025-03-15T14:30:00Z
commit: abc123
interactions:
  - seq: 0
    port: process
    method: launch
    input:
      program: /bin/sh
      args: ["-c", "exit 2"]
    output:
      Ok:
        code: 2
"#;
        let cassette = Cassette::from_yaml(yaml).unwrap();
        assert_eq!(cassette.name, "manual");
        assert_eq!(cassette.recorded_at.to_rfc3339(), "2025-03-15T14:30:00+00:00");
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].input["args"], json!(["-c", "exit 2"]));
        assert_eq!(cassette.interactions[0].output, json!({"Ok": {"code": 2}}));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Cassette::load(std::path::Path::new("/nonexistent/x.cassette.yaml")).unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }
}
