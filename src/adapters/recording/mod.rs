//! Recording adapters that capture interactions to cassettes.

pub mod process;

pub use process::RecordingProcessLauncher;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Reserves the cassette slot for a call as it is made.
///
/// Returns the slot's `seq`, or `None` if the call cannot be recorded.
pub(crate) fn reserve_interaction<I: Serialize>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
) -> Option<u64> {
    let input_json = match serde_json::to_value(input) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(port, method, error = %e, "dropping unserializable recording input");
            return None;
        }
    };

    match recorder.lock() {
        Ok(mut guard) => Some(guard.reserve(port, method, input_json)),
        Err(_) => {
            tracing::warn!(port, method, "recorder lock poisoned, interaction dropped");
            None
        }
    }
}

/// Fills a reserved slot with a `Result<T, E>`.
///
/// `Ok(v)` is stored as `{"Ok": v}` and `Err(e)` as `{"Err": e.to_string()}`,
/// the shape the replaying adapters read back.
pub(crate) fn complete_result<T, E>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    seq: u64,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
{
    let output_json = match result {
        Ok(v) => match serde_json::to_value(v) {
            Ok(inner) => serde_json::json!({ "Ok": inner }),
            Err(e) => {
                tracing::warn!(seq, error = %e, "unserializable output, slot left empty");
                return;
            }
        },
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };

    match recorder.lock() {
        Ok(mut guard) => guard.complete(seq, output_json),
        Err(_) => tracing::warn!(seq, "recorder lock poisoned, slot left empty"),
    }
}
