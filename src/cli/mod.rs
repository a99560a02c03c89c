//! Command-line interface for `spi`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::config::{self, CliOverrides, EnvOverrides, ResolvedConfig};
use crate::error::Result;
use crate::logging;

/// `spi` - per-space issue records for the chat issue bot.
#[derive(Parser, Debug)]
#[command(name = "spi")]
#[command(
    author,
    version,
    about = "Per-space issue records for a chat-bot issue tracking add-on",
    long_about = None
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Properties file to use instead of the project default
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an spi workspace
    Init(InitArgs),

    /// Open a new issue for a space (replaces any existing record)
    Create(CreateArgs),

    /// Close the issue of a space
    Close(CloseArgs),

    /// Stop offering inclusivity help in a space
    DisableHelp(SpaceArg),

    /// Print whether inclusivity help is offered in a space
    ShouldHelp(SpaceArg),

    /// Show the issue record of a space
    Show(SpaceArg),

    /// List issue records
    List(ListArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing properties file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Issue title
    pub title: String,

    /// Issue description
    pub description: String,

    /// Space id (e.g. `spaces/AAAA`); used verbatim as the record key
    pub space: String,

    /// Event subscription id for the space
    pub subscription: String,
}

#[derive(Args, Debug)]
pub struct CloseArgs {
    /// Space id the record is stored under
    pub space: String,

    /// Resolution text (defaults to "Unknown")
    #[arg(long, short)]
    pub resolution: Option<String>,

    /// Report URL
    #[arg(long, default_value = "")]
    pub report_url: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show records with this status (opened, closed)
    #[arg(long, short)]
    pub status: Option<String>,
}

#[derive(Args, Debug)]
pub struct SpaceArg {
    /// Space id the record is stored under
    pub space: String,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved or the command fails.
pub fn run(cli: &Cli) -> Result<()> {
    let overrides = CliOverrides {
        store: cli.store.clone(),
    };
    let env = EnvOverrides::from_env();
    let cwd = std::env::current_dir()?;
    let json = cli.json;

    let with_store = |action: &dyn Fn(&ResolvedConfig) -> Result<()>| -> Result<()> {
        let resolved = config::resolve(&cwd, &overrides, &env)?;
        start_logging(cli, resolved.log_file.as_deref());
        debug!(
            store = %resolved.store_path.display(),
            command = cli.command.name(),
            "Resolved config"
        );
        action(&resolved)
    };

    match &cli.command {
        Commands::Init(args) => {
            start_logging(cli, None);
            commands::init::execute(args, &cwd, &overrides, &env, json)
        }
        Commands::Version => {
            start_logging(cli, None);
            commands::version::execute(json)
        }
        Commands::Create(args) => {
            with_store(&|resolved| commands::create::execute(args, resolved, json))
        }
        Commands::Close(args) => {
            with_store(&|resolved| commands::close::execute(args, resolved, json))
        }
        Commands::DisableHelp(arg) => {
            with_store(&|resolved| commands::help::disable(&arg.space, resolved, json))
        }
        Commands::ShouldHelp(arg) => {
            with_store(&|resolved| commands::help::check(&arg.space, resolved, json))
        }
        Commands::Show(arg) => {
            with_store(&|resolved| commands::show::execute(&arg.space, resolved, json))
        }
        Commands::List(args) => {
            with_store(&|resolved| commands::list::execute(args, resolved, json))
        }
    }
}

fn start_logging(cli: &Cli, log_file: Option<&Path>) {
    if let Err(e) = logging::init_logging(cli.verbose, cli.quiet, log_file) {
        eprintln!("Failed to initialize logging: {e}");
    }
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Create(_) => "create",
            Self::Close(_) => "close",
            Self::DisableHelp(_) => "disable-help",
            Self::ShouldHelp(_) => "should-help",
            Self::Show(_) => "show",
            Self::List(_) => "list",
            Self::Version => "version",
        }
    }
}
