//! Create command implementation.

use tracing::info;

use crate::cli::CreateArgs;
use crate::cli::commands::{open_store, print_json};
use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::format::KeyedIssue;

/// Execute the create command.
///
/// Any record already stored under the space is replaced.
///
/// # Errors
///
/// Returns an error if the properties file cannot be read or written.
pub fn execute(args: &CreateArgs, config: &ResolvedConfig, json: bool) -> Result<()> {
    let mut store = open_store(config);
    let issue = store.create(
        &args.title,
        &args.description,
        &args.space,
        &args.subscription,
    )?;
    info!(key = %args.space, "create: stored record");

    if json {
        return print_json(&KeyedIssue {
            key: args.space.clone(),
            issue,
        });
    }

    println!("Created issue for {}: {}", args.space, issue.title);
    Ok(())
}
