//! Close command implementation.

use crate::cli::CloseArgs;
use crate::cli::commands::{open_store, print_json};
use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::format::KeyedIssue;

/// Execute the close command.
///
/// # Errors
///
/// Returns `RecordNotFound` if the space has no record, or an error if the
/// properties file cannot be read or written.
pub fn execute(args: &CloseArgs, config: &ResolvedConfig, json: bool) -> Result<()> {
    let mut store = open_store(config);
    let issue = store.close(&args.space, args.resolution.as_deref(), &args.report_url)?;

    if json {
        return print_json(&KeyedIssue {
            key: args.space.clone(),
            issue,
        });
    }

    println!("Closed {}: {}", args.space, issue.resolution);
    Ok(())
}
