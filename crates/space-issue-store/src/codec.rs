//! JSON encoding of issue records at the property-store boundary.

use crate::error::{Result, StoreError};
use crate::model::Issue;

/// Encode a record as compact JSON.
///
/// # Errors
///
/// Returns `Encode` if serialization fails.
pub fn encode(issue: &Issue) -> Result<String> {
    serde_json::to_string(issue).map_err(StoreError::Encode)
}

/// Decode the value read from `key`.
///
/// # Errors
///
/// Returns `RecordNotFound` if nothing was stored under `key`, or `Decode`
/// if the stored text is not a complete issue record.
pub fn decode(key: &str, value: Option<String>) -> Result<Issue> {
    let raw = value.ok_or_else(|| StoreError::RecordNotFound {
        key: key.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
        key: key.to_string(),
        source,
    })
}
