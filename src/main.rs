//! `spi` - per-space issue records for the chat issue bot.
//!
//! Operates on a JSON properties file holding one issue record per space.

use clap::Parser;
use space_issues::CliError;
use space_issues::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::run(&cli) {
        handle_error(&e, cli.json);
    }
}

fn handle_error(err: &CliError, json_mode: bool) -> ! {
    if json_mode {
        let json = err.to_json();
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
        );
    } else {
        eprintln!("Error: {err}");
    }

    std::process::exit(err.exit_code());
}
