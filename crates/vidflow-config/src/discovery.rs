use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use tracing::debug;

use vidflow_utils::ConfigError;
use vidflow_utils::types::ConfigSource;

use crate::model::{CliArgs, Config, DisplayConfig, StoreConfig};

pub const CONFIG_DIR: &str = ".vidflow";
pub const CONFIG_FILE: &str = "config.toml";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    store: Option<StoreConfig>,
    display: Option<DisplayConfig>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    pub fn discover(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|e| ConfigError::DiscoveryFailed {
            reason: format!("cannot read current directory: {e}"),
        })?;
        let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(|p| ConfigError::DiscoveryFailed {
            reason: format!("current directory is not valid UTF-8: {}", p.display()),
        })?;
        Self::discover_from(&cwd, cli_args)
    }

    /// Discover and load configuration starting from a specific directory.
    ///
    /// Relative CLI paths resolve against `start_dir`. Relative file and
    /// default paths resolve against the directory holding `.vidflow/`, or
    /// `start_dir` when no config file is in play.
    pub fn discover_from(start_dir: &Utf8Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let config_path = match &cli_args.config_path {
            Some(explicit) => {
                let explicit = start_dir.join(explicit);
                if !explicit.is_file() {
                    return Err(ConfigError::NotFound {
                        path: explicit.to_string(),
                    });
                }
                Some(explicit)
            }
            None => discover_config_file_from(start_dir),
        };

        let base = config_path
            .as_deref()
            .and_then(project_root_of)
            .unwrap_or(start_dir)
            .to_path_buf();
        config.index_path = base.join(&config.index_path);
        config.manuscript_dir = base.join(&config.manuscript_dir);

        if let Some(path) = &config_path {
            let file_config = load_config_file(path)?;
            debug!(config = %path, "Loaded configuration file");

            if let Some(store) = file_config.store {
                if let Some(index_path) = store.index_path {
                    config.index_path = base.join(non_empty("store.index_path", index_path)?);
                    config.attribute("index_path", ConfigSource::Config);
                }
                if let Some(manuscript_dir) = store.manuscript_dir {
                    config.manuscript_dir =
                        base.join(non_empty("store.manuscript_dir", manuscript_dir)?);
                    config.attribute("manuscript_dir", ConfigSource::Config);
                }
            }
            if let Some(display) = file_config.display {
                if let Some(color) = display.color {
                    config.color = color;
                    config.attribute("color", ConfigSource::Config);
                }
                if let Some(verbose) = display.verbose {
                    config.verbose = verbose;
                    config.attribute("verbose", ConfigSource::Config);
                }
            }
            config.config_file = Some(path.clone());
        }

        if let Some(index_path) = &cli_args.index_path {
            config.index_path = start_dir.join(index_path);
            config.attribute("index_path", ConfigSource::Cli);
        }
        if let Some(manuscript_dir) = &cli_args.manuscript_dir {
            config.manuscript_dir = start_dir.join(manuscript_dir);
            config.attribute("manuscript_dir", ConfigSource::Cli);
        }
        if cli_args.no_color {
            config.color = false;
            config.attribute("color", ConfigSource::Cli);
        }
        if let Some(verbose) = cli_args.verbose {
            config.verbose = verbose;
            config.attribute("verbose", ConfigSource::Cli);
        }

        Ok(config)
    }

    fn attribute(&mut self, key: &str, source: ConfigSource) {
        self.source_attribution.insert(key.to_string(), source);
    }
}

/// Search upward from `start_dir` for `.vidflow/config.toml`.
///
/// Stops at the filesystem root or at a repository root (`.git`, `.hg`,
/// `.svn`), whichever comes first.
#[must_use]
pub fn discover_config_file_from(start_dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() || dir.join(".hg").exists() || dir.join(".svn").exists() {
            break;
        }
        current = dir.parent();
    }
    None
}

/// Directory that contains `.vidflow/` for a discovered config file.
fn project_root_of(config_path: &Utf8Path) -> Option<&Utf8Path> {
    let dir = config_path.parent()?;
    if dir.file_name() == Some(CONFIG_DIR) {
        dir.parent()
    } else {
        Some(dir)
    }
}

fn non_empty(key: &str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: "empty path".to_string(),
        });
    }
    Ok(value)
}

fn load_config_file(path: &Utf8Path) -> Result<TomlConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DiscoveryFailed {
        reason: format!("cannot read {path}: {e}"),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::InvalidFile(format!("{path}: {e}")))
}
