use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use vidflow_utils::types::ConfigSource;

pub const DEFAULT_INDEX_PATH: &str = "index.yaml";
pub const DEFAULT_MANUSCRIPT_DIR: &str = "manuscript";

/// `[store]` section of config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    pub index_path: Option<String>,
    pub manuscript_dir: Option<String>,
}

/// `[display]` section of config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    pub color: Option<bool>,
    pub verbose: Option<bool>,
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file; disables discovery
    pub config_path: Option<Utf8PathBuf>,
    pub index_path: Option<Utf8PathBuf>,
    pub manuscript_dir: Option<Utf8PathBuf>,
    /// Set by `--no-color` or a non-empty `NO_COLOR`
    pub no_color: bool,
    pub verbose: Option<bool>,
}

/// Resolved configuration.
///
/// Paths are absolute or relative to the directory vidflow was started in;
/// relative paths from a config file are resolved against the directory that
/// holds `.vidflow/`.
#[derive(Debug, Clone)]
pub struct Config {
    pub index_path: Utf8PathBuf,
    pub manuscript_dir: Utf8PathBuf,
    pub color: bool,
    pub verbose: bool,
    /// Config file that was loaded, if any
    pub config_file: Option<Utf8PathBuf>,
    pub source_attribution: HashMap<String, ConfigSource>,
}

impl Default for Config {
    fn default() -> Self {
        let source_attribution = ["index_path", "manuscript_dir", "color", "verbose"]
            .into_iter()
            .map(|key| (key.to_string(), ConfigSource::Default))
            .collect();
        Self {
            index_path: Utf8PathBuf::from(DEFAULT_INDEX_PATH),
            manuscript_dir: Utf8PathBuf::from(DEFAULT_MANUSCRIPT_DIR),
            color: true,
            verbose: false,
            config_file: None,
            source_attribution,
        }
    }
}

impl Config {
    /// Source of a key; unknown keys report as defaults.
    #[must_use]
    pub fn source_of(&self, key: &str) -> ConfigSource {
        self.source_attribution
            .get(key)
            .copied()
            .unwrap_or(ConfigSource::Default)
    }
}
