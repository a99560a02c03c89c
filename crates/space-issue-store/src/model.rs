//! Core data types for the issue record store.
//!
//! Field names serialize in camelCase so stored records stay readable by the
//! chat app that shares the property store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix chat resource names carry in front of the bare space id.
pub const SPACE_PREFIX: &str = "spaces/";

/// Resolution recorded when an issue is closed without one.
pub const UNKNOWN_RESOLUTION: &str = "Unknown";

/// Issue lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Opened,
    Closed,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Opened => "OPENED",
            Self::Closed => "CLOSED",
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OPENED" => Ok(Self::Opened),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(crate::error::StoreError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// The issue tracked for a single chat space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Title given when the issue was opened.
    pub title: String,

    /// Description given when the issue was opened.
    pub description: String,

    /// Bare space id (no `spaces/` prefix).
    pub space_id: String,

    /// Event subscription tied to the space.
    pub subscription_id: String,

    /// Lifecycle status.
    pub status: Status,

    /// Outcome text; empty until closed.
    pub resolution: String,

    /// Link to the closing report; empty until closed.
    pub report_url: String,

    /// Whether the bot still offers inclusivity prompts in the space.
    pub inclusivity_help: bool,
}

impl Issue {
    /// Build a freshly opened issue.
    ///
    /// `space_id` is normalized; nothing else is validated.
    #[must_use]
    pub fn opened(
        title: impl Into<String>,
        description: impl Into<String>,
        space_id: &str,
        subscription_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            space_id: normalize_space_id(space_id).to_string(),
            subscription_id: subscription_id.into(),
            status: Status::Opened,
            resolution: String::new(),
            report_url: String::new(),
            inclusivity_help: true,
        }
    }

    /// Mark the issue closed.
    ///
    /// A missing or empty resolution is recorded as [`UNKNOWN_RESOLUTION`].
    pub fn close(&mut self, resolution: Option<&str>, report_url: &str) {
        self.status = Status::Closed;
        self.resolution = match resolution {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => UNKNOWN_RESOLUTION.to_string(),
        };
        self.report_url = report_url.to_string();
    }
}

/// Strip one leading [`SPACE_PREFIX`] from a space id.
#[must_use]
pub fn normalize_space_id(space_id: &str) -> &str {
    space_id.strip_prefix(SPACE_PREFIX).unwrap_or(space_id)
}
