//! JSON output contracts for the `--json` flags.
//!
//! Every output carries `schema_version` and is emitted through
//! [`emit_jcs`](crate::canonicalization::emit_jcs). Phases are identified by
//! their stable snake-case or kebab-case keys, never by display names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current version of every JSON output schema.
pub const SCHEMA_VERSION: &str = "1";

/// Source of a configuration value.
///
/// CLI arguments > config file > built-in defaults.
///
/// Serializes to lowercase strings: `"cli"`, `"config"`, `"default"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    /// Value provided via CLI argument (highest precedence).
    Cli,
    /// Value loaded from configuration file.
    Config,
    /// Built-in default value (lowest precedence).
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "cli"),
            Self::Config => write!(f, "config"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A configuration value with its source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigValue {
    pub value: serde_json::Value,
    pub source: ConfigSource,
}

/// `vidflow config --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigOutput {
    pub schema_version: String,
    /// Config file that was loaded, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    pub effective_config: BTreeMap<String, ConfigValue>,
}

/// `vidflow phases --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseCountsOutput {
    pub schema_version: String,
    /// Number of indexed videos that were classified.
    pub total: usize,
    /// Videos per phase tag, every tag present.
    pub counts: BTreeMap<String, usize>,
    /// Index entries whose record could not be loaded.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<String>,
}

/// One row of `vidflow list --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSummary {
    pub name: String,
    pub category: String,
    pub phase: String,
    /// Sponsor block reason, present only when blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<String>,
}

/// `vidflow list --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListOutput {
    pub schema_version: String,
    pub videos: Vec<VideoSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<String>,
}

/// Score of one production phase in `vidflow status --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseScoreInfo {
    pub phase: String,
    pub label: String,
    pub completed: u32,
    pub total: u32,
    pub complete: bool,
}

/// `vidflow status --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoStatusOutput {
    pub schema_version: String,
    pub name: String,
    pub category: String,
    pub path: String,
    pub phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<String>,
    pub phases: Vec<PhaseScoreInfo>,
    pub overall: PhaseScoreInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonicalization::emit_jcs;

    #[test]
    fn test_config_source_lowercase() {
        assert_eq!(
            serde_json::to_string(&ConfigSource::Cli).unwrap(),
            r#""cli""#
        );
        assert_eq!(ConfigSource::Default.to_string(), "default");
    }

    #[test]
    fn test_summary_omits_unblocked() {
        let summary = VideoSummary {
            name: "Argo".to_string(),
            category: "devops".to_string(),
            phase: "ideas".to_string(),
            blocked: None,
        };
        assert_eq!(
            emit_jcs(&summary).unwrap(),
            r#"{"category":"devops","name":"Argo","phase":"ideas"}"#
        );
    }

    #[test]
    fn test_phase_counts_skips_empty_skipped() {
        let output = PhaseCountsOutput {
            schema_version: SCHEMA_VERSION.to_string(),
            total: 0,
            counts: BTreeMap::new(),
            skipped: Vec::new(),
        };
        let json = emit_jcs(&output).unwrap();
        assert!(!json.contains("skipped"));
        assert!(json.contains(r#""schema_version":"1""#));
    }
}
