//! Show command implementation.

use crate::cli::commands::{open_store, print_json};
use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::format::{KeyedIssue, format_issue_details};

/// Execute the show command.
///
/// # Errors
///
/// Returns `RecordNotFound` if the space has no record, or an error if the
/// properties file cannot be read.
pub fn execute(space: &str, config: &ResolvedConfig, json: bool) -> Result<()> {
    let store = open_store(config);
    let issue = store.get(space)?;

    if json {
        return print_json(&KeyedIssue {
            key: space.to_string(),
            issue,
        });
    }

    println!("{}", format_issue_details(space, &issue));
    Ok(())
}
