//! List command implementation.

use space_issue_store::Status;

use crate::cli::ListArgs;
use crate::cli::commands::{open_store, print_json};
use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::format::{KeyedIssue, format_issue_line};

/// Execute the list command.
///
/// # Errors
///
/// Returns `InvalidStatus` for an unknown `--status` value, or an error if
/// the properties file cannot be read or any stored value is not a valid
/// record.
pub fn execute(args: &ListArgs, config: &ResolvedConfig, json: bool) -> Result<()> {
    let status = args
        .status
        .as_deref()
        .map(str::parse::<Status>)
        .transpose()?;

    let store = open_store(config);
    let mut records = store.list()?;
    if let Some(status) = status {
        records.retain(|(_, issue)| issue.status == status);
    }

    if json {
        let keyed: Vec<KeyedIssue> = records
            .into_iter()
            .map(|(key, issue)| KeyedIssue { key, issue })
            .collect();
        return print_json(&keyed);
    }

    if records.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    for (key, issue) in &records {
        println!("{}", format_issue_line(key, issue));
    }
    Ok(())
}
