//! Value serialization helpers.
//!
//! Serde already provides JSON (and other) serialization for the data
//! types. This module centralizes the convenience helpers and keeps
//! formatting stable.

use crate::error::SequenceError;
use crate::value::Value;

/// Serialize a value to pretty JSON.
///
/// # Errors
///
/// Returns an internal error if serialization fails.
pub fn to_json_pretty(value: &Value) -> Result<String, SequenceError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| SequenceError::internal(format!("serialize value: {e}")))
}

/// Deserialize a value from JSON.
///
/// # Errors
///
/// Returns an internal error if the input is not a valid encoded value.
pub fn from_json(s: &str) -> Result<Value, SequenceError> {
    serde_json::from_str::<Value>(s)
        .map_err(|e| SequenceError::internal(format!("deserialize value: {e}")))
}
