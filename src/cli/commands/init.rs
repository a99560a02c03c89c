use serde::Serialize;
use space_issue_store::FileProperties;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::InitArgs;
use crate::cli::commands::print_json;
use crate::config::{
    CONFIG_FILENAME, CONFIG_TEMPLATE, CliOverrides, DEFAULT_PROPERTIES_FILENAME, EnvOverrides,
    SPI_DIR_NAME,
};
use crate::error::{CliError, Result};

#[derive(Serialize)]
struct InitOutput {
    spi_dir: PathBuf,
    store: PathBuf,
}

/// Execute the init command.
///
/// Creates the `.spi` directory (or `SPI_DIR`), a config template and an
/// empty properties file. An explicit `--store`/`SPI_STORE` path is created
/// instead of the default properties file.
///
/// # Errors
///
/// Returns `AlreadyInitialized` if the properties file exists and `--force`
/// was not given, or an error if the directory or files cannot be created.
pub fn execute(
    args: &InitArgs,
    cwd: &Path,
    cli: &CliOverrides,
    env: &EnvOverrides,
    json: bool,
) -> Result<()> {
    let spi_dir = env
        .dir
        .as_ref()
        .map_or_else(|| cwd.join(SPI_DIR_NAME), |dir| cwd.join(dir));
    let store_path = cli
        .store
        .as_ref()
        .or(env.store.as_ref())
        .map_or_else(|| spi_dir.join(DEFAULT_PROPERTIES_FILENAME), |p| cwd.join(p));

    if store_path.exists() && !args.force {
        return Err(CliError::AlreadyInitialized { path: store_path });
    }

    fs::create_dir_all(&spi_dir)?;

    // Write config.yaml template
    let config_path = spi_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    FileProperties::init(&store_path)?;
    info!(spi_dir = %spi_dir.display(), store = %store_path.display(), "Initialized workspace");

    if json {
        return print_json(&InitOutput {
            spi_dir,
            store: store_path,
        });
    }

    println!("Initialized spi workspace in {}", spi_dir.display());
    Ok(())
}
