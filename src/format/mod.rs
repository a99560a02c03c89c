//! Output formatting for `spi`.
//!
//! Supports human-readable text output and machine-parseable JSON. JSON
//! output keeps the stored wire field names.
//!
//! # JSON Output Types
//!
//! - [`KeyedIssue`] - Issue together with the property key it lives under (list/show)
//! - [`HelpStatus`] - Inclusivity help flag for a space (should-help)

mod output;
mod text;

pub use output::{HelpStatus, KeyedIssue};
pub use text::{format_help_flag, format_issue_details, format_issue_line, format_status_icon};
