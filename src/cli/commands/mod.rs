//! Command implementations.

pub mod close;
pub mod create;
pub mod help;
pub mod init;
pub mod list;
pub mod show;
pub mod version;

use serde::Serialize;
use space_issue_store::{FileProperties, IssueRecordStore};

use crate::config::ResolvedConfig;
use crate::error::Result;

/// Open the record store over the configured properties file.
#[must_use]
pub fn open_store(config: &ResolvedConfig) -> IssueRecordStore<FileProperties> {
    IssueRecordStore::new(FileProperties::new(&config.store_path))
}

/// Print a value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns `Json` if the value cannot be serialized.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
