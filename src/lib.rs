//! `space_issues` - per-space issue records for a chat-bot add-on
//!
//! This crate provides the `spi` CLI over the
//! [`space_issue_store`] record store, backed by a JSON properties file.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Configuration management (YAML + environment + flags)
//! - [`error`] - Error types with stable codes and exit codes
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - `tracing` subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use error::{CliError, Result};
