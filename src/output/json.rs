//! JSON serialization for snapshots.

use crate::result::Snapshot;

/// Serialize a Snapshot to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (non-finite floats serialize as
/// `null`, so this should not happen for a Snapshot).
pub fn to_json(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string(snapshot)
}

/// Serialize a Snapshot to a pretty-printed JSON string.
///
/// # Errors
///
/// Same as [`to_json`].
pub fn to_json_pretty(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}
