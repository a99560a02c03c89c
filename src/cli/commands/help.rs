//! Inclusivity help commands (`disable-help`, `should-help`).

use crate::cli::commands::{open_store, print_json};
use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::format::{HelpStatus, format_help_flag};

/// Turn inclusivity help off for a space.
///
/// # Errors
///
/// Returns `RecordNotFound` if the space has no record, or an error if the
/// properties file cannot be read or written.
pub fn disable(space: &str, config: &ResolvedConfig, json: bool) -> Result<()> {
    let mut store = open_store(config);
    store.disable_inclusivity_help(space)?;

    if json {
        return print_json(&HelpStatus {
            key: space.to_string(),
            inclusivity_help: false,
        });
    }

    println!(
        "Inclusivity help {} for {space}",
        format_help_flag(false)
    );
    Ok(())
}

/// Print whether inclusivity help is offered in a space.
///
/// # Errors
///
/// Returns `RecordNotFound` if the space has no record, or an error if the
/// properties file cannot be read.
pub fn check(space: &str, config: &ResolvedConfig, json: bool) -> Result<()> {
    let store = open_store(config);
    let enabled = store.should_help_with_inclusivity(space)?;

    if json {
        return print_json(&HelpStatus {
            key: space.to_string(),
            inclusivity_help: enabled,
        });
    }

    println!("{enabled}");
    Ok(())
}
