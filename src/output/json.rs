//! JSON serialization for bootstrap results.

use crate::result::BootstrapResult;

/// Serialize a BootstrapResult to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for BootstrapResult).
pub fn to_json(result: &BootstrapResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a BootstrapResult to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for BootstrapResult).
pub fn to_json_pretty(result: &BootstrapResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
