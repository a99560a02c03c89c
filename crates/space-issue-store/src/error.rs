//! Error types for `space-issue-store`.

use thiserror::Error;

/// Primary error type for record store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    // === Record Errors ===
    /// No value is stored under the key.
    #[error("Issue record not found: {key}")]
    RecordNotFound { key: String },

    /// The stored value is not a valid issue record.
    #[error("Malformed issue record under '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be serialized.
    #[error("Failed to encode issue record: {0}")]
    Encode(#[source] serde_json::Error),

    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    // === Backend Errors ===
    /// The property store itself failed.
    #[error("Property store error: {0}")]
    Backend(String),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this error means the space has no record yet.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}

/// Result type using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
