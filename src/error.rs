//! Error types for the `spi` CLI.
//!
//! Every error carries a stable machine code and an exit code so callers can
//! script against the binary.

use serde_json::{Value, json};
use space_issue_store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Failure reported by the record store.
    #[error(transparent)]
    Store(#[from] StoreError),

    // === Workspace Errors ===
    /// No `.spi` directory was found.
    #[error("Not initialized: no .spi directory found (run `spi init`)")]
    NotInitialized,

    /// `spi init` found an existing properties file.
    #[error("Already initialized at {path}")]
    AlreadyInitialized { path: PathBuf },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// YAML config could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Store(err) => match err {
                StoreError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
                StoreError::Decode { .. } => "MALFORMED_RECORD",
                StoreError::Encode(_) => "JSON_ERROR",
                StoreError::InvalidStatus { .. } => "INVALID_STATUS",
                StoreError::Backend(_) => "STORE_ERROR",
                StoreError::Io(_) => "IO_ERROR",
            },
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::AlreadyInitialized { .. } => "ALREADY_INITIALIZED",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Yaml(_) => "YAML_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }

    /// Process exit code grouped by category.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            // Store (2)
            Self::NotInitialized
            | Self::AlreadyInitialized { .. }
            | Self::Store(StoreError::Backend(_)) => 2,
            // Record (3)
            Self::Store(StoreError::RecordNotFound { .. } | StoreError::Decode { .. }) => 3,
            // Validation (4)
            Self::Store(StoreError::InvalidStatus { .. }) => 4,
            // Config (7)
            Self::Config { .. } | Self::Yaml(_) => 7,
            // I/O (8)
            Self::Io(_) | Self::Json(_) | Self::Store(StoreError::Io(_) | StoreError::Encode(_)) => 8,
        }
    }

    /// JSON form written to stderr in `--json` mode.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "exit_code": self.exit_code(),
            }
        })
    }
}

/// Result type using `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
