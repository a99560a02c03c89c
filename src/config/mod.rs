//! Configuration management for `spi`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides (`--store`)
//! 2. Environment variables (`SPI_STORE`, `SPI_LOG_FILE`)
//! 3. Project config (.spi/config.yaml)
//! 4. Defaults (.spi/properties.json)
//!
//! Relative paths from the project config resolve against the `.spi`
//! directory; CLI and environment paths resolve against the working
//! directory.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project directory.
pub const SPI_DIR_NAME: &str = ".spi";
/// Project config file inside the project directory.
pub const CONFIG_FILENAME: &str = "config.yaml";
/// Default properties file inside the project directory.
pub const DEFAULT_PROPERTIES_FILENAME: &str = "properties.json";

/// Template written by `spi init`.
pub const CONFIG_TEMPLATE: &str = r"# spi project configuration
# store: properties.json
# log_file: spi.log
";

/// One configuration source. Unset keys fall through to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl ConfigLayer {
    /// Build a layer from a YAML file. A missing or empty file is an empty
    /// layer.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `Yaml` if it is not valid
    /// YAML, or `Config` if it is not a mapping.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&contents)?;
        match value {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(_) => Ok(serde_yaml::from_value(value)?),
            _ => Err(CliError::config(format!(
                "{} must be a YAML mapping",
                path.display()
            ))),
        }
    }

    /// Layer with paths made absolute against `base`.
    #[must_use]
    pub fn rebased(self, base: &Path) -> Self {
        Self {
            store: self.store.map(|p| base.join(p)),
            log_file: self.log_file.map(|p| base.join(p)),
        }
    }

    /// Merge layers in increasing order of precedence.
    #[must_use]
    pub fn merge_layers(layers: &[Self]) -> Self {
        let mut merged = Self::default();
        for layer in layers {
            if layer.store.is_some() {
                merged.store.clone_from(&layer.store);
            }
            if layer.log_file.is_some() {
                merged.log_file.clone_from(&layer.log_file);
            }
        }
        merged
    }
}

/// Values taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub store: Option<PathBuf>,
}

impl CliOverrides {
    #[must_use]
    pub fn as_layer(&self) -> ConfigLayer {
        ConfigLayer {
            store: self.store.clone(),
            log_file: None,
        }
    }
}

/// Values taken from the environment.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub dir: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl EnvOverrides {
    /// Read `SPI_DIR`, `SPI_STORE` and `SPI_LOG_FILE`, ignoring blank values.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            dir: env_path("SPI_DIR"),
            store: env_path("SPI_STORE"),
            log_file: env_path("SPI_LOG_FILE"),
        }
    }

    #[must_use]
    pub fn as_layer(&self) -> ConfigLayer {
        ConfigLayer {
            store: self.store.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub spi_dir: Option<PathBuf>,
    pub store_path: PathBuf,
    pub log_file: Option<PathBuf>,
}

/// Discover the active `.spi` directory.
///
/// An explicit directory (from `SPI_DIR`, relative to `start`) is used
/// as-is and never falls back to the walk; otherwise walks up from `start`.
#[must_use]
pub fn discover_spi_dir(start: &Path, env_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = env_dir {
        let dir = start.join(dir);
        return dir.is_dir().then_some(dir);
    }

    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(SPI_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the store path and log file for an invocation started in `cwd`.
///
/// # Errors
///
/// Returns `NotInitialized` if no store path is configured and no `.spi`
/// directory exists, or the project config's read error.
pub fn resolve(cwd: &Path, cli: &CliOverrides, env: &EnvOverrides) -> Result<ResolvedConfig> {
    let spi_dir = discover_spi_dir(cwd, env.dir.as_deref());

    let (defaults, project) = match &spi_dir {
        Some(dir) => (
            ConfigLayer {
                store: Some(dir.join(DEFAULT_PROPERTIES_FILENAME)),
                log_file: None,
            },
            ConfigLayer::from_yaml(&dir.join(CONFIG_FILENAME))?.rebased(dir),
        ),
        None => (ConfigLayer::default(), ConfigLayer::default()),
    };

    let merged = ConfigLayer::merge_layers(&[
        defaults,
        project,
        env.as_layer().rebased(cwd),
        cli.as_layer().rebased(cwd),
    ]);

    let store_path = merged.store.ok_or(CliError::NotInitialized)?;
    Ok(ResolvedConfig {
        spi_dir,
        store_path,
        log_file: merged.log_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(root: &Path, config: Option<&str>) -> PathBuf {
        let dir = root.join(SPI_DIR_NAME);
        fs::create_dir_all(&dir).unwrap();
        if let Some(yaml) = config {
            fs::write(dir.join(CONFIG_FILENAME), yaml).unwrap();
        }
        dir
    }

    #[test]
    fn test_defaults_to_project_properties() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = project(tmp.path(), None);

        let resolved =
            resolve(tmp.path(), &CliOverrides::default(), &EnvOverrides::default()).unwrap();
        assert_eq!(resolved.spi_dir.as_deref(), Some(dir.as_path()));
        assert_eq!(resolved.store_path, dir.join(DEFAULT_PROPERTIES_FILENAME));
        assert_eq!(resolved.log_file, None);
    }

    #[test]
    fn test_discovers_parent_project() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = project(tmp.path(), None);
        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(discover_spi_dir(&nested, None), Some(dir));
    }

    #[test]
    fn test_env_dir_overrides_walk() {
        let tmp = tempfile::tempdir().unwrap();
        project(tmp.path(), None);
        let other = tmp.path().join("elsewhere");
        fs::create_dir_all(&other).unwrap();

        assert_eq!(
            discover_spi_dir(tmp.path(), Some(Path::new("elsewhere"))),
            Some(other)
        );
    }

    #[test]
    fn test_missing_env_dir_is_not_initialized() {
        let tmp = tempfile::tempdir().unwrap();
        project(tmp.path(), None);
        let env = EnvOverrides {
            dir: Some(PathBuf::from("does-not-exist")),
            ..EnvOverrides::default()
        };

        assert_eq!(discover_spi_dir(tmp.path(), env.dir.as_deref()), None);
        let err = resolve(tmp.path(), &CliOverrides::default(), &env).unwrap_err();
        assert!(matches!(err, CliError::NotInitialized));
    }

    #[test]
    fn test_not_initialized_without_project_or_store() {
        let tmp = tempfile::tempdir().unwrap();
        let err =
            resolve(tmp.path(), &CliOverrides::default(), &EnvOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::NotInitialized));
    }

    #[test]
    fn test_project_config_is_relative_to_spi_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = project(tmp.path(), Some("store: custom.json\nlog_file: spi.log\n"));

        let resolved =
            resolve(tmp.path(), &CliOverrides::default(), &EnvOverrides::default()).unwrap();
        assert_eq!(resolved.store_path, dir.join("custom.json"));
        assert_eq!(resolved.log_file, Some(dir.join("spi.log")));
    }

    #[test]
    fn test_template_config_parses_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = project(tmp.path(), Some(CONFIG_TEMPLATE));
        let layer = ConfigLayer::from_yaml(&dir.join(CONFIG_FILENAME)).unwrap();
        assert_eq!(layer, ConfigLayer::default());
    }

    #[test]
    fn test_precedence_cli_over_env_over_project() {
        let tmp = tempfile::tempdir().unwrap();
        project(tmp.path(), Some("store: project.json\n"));

        let env = EnvOverrides {
            dir: None,
            store: Some(PathBuf::from("env.json")),
            log_file: Some(PathBuf::from("env.log")),
        };
        let resolved = resolve(tmp.path(), &CliOverrides::default(), &env).unwrap();
        assert_eq!(resolved.store_path, tmp.path().join("env.json"));
        assert_eq!(resolved.log_file, Some(tmp.path().join("env.log")));

        let cli = CliOverrides {
            store: Some(PathBuf::from("cli.json")),
        };
        let resolved = resolve(tmp.path(), &cli, &env).unwrap();
        assert_eq!(resolved.store_path, tmp.path().join("cli.json"));
    }

    #[test]
    fn test_explicit_store_without_project() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = CliOverrides {
            store: Some(tmp.path().join("props.json")),
        };
        let resolved = resolve(tmp.path(), &cli, &EnvOverrides::default()).unwrap();
        assert_eq!(resolved.spi_dir, None);
        assert_eq!(resolved.store_path, tmp.path().join("props.json"));
    }

    #[test]
    fn test_non_mapping_config_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = project(tmp.path(), Some("- a\n- b\n"));
        let err = ConfigLayer::from_yaml(&dir.join(CONFIG_FILENAME)).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }
}
