use std::collections::BTreeMap;

use serde_json::Value;
use vidflow_utils::types::{ConfigOutput, ConfigValue, SCHEMA_VERSION};

use crate::model::Config;

impl Config {
    /// Get effective configuration as key-value pairs with source attribution
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, ConfigValue> {
        let mut config = BTreeMap::new();

        let mut add_config = |key: &str, value: Value| {
            config.insert(
                key.to_string(),
                ConfigValue {
                    value,
                    source: self.source_of(key),
                },
            );
        };

        add_config("index_path", Value::from(self.index_path.as_str()));
        add_config("manuscript_dir", Value::from(self.manuscript_dir.as_str()));
        add_config("color", Value::from(self.color));
        add_config("verbose", Value::from(self.verbose));

        config
    }

    /// `vidflow config --json` payload.
    #[must_use]
    pub fn to_output(&self) -> ConfigOutput {
        ConfigOutput {
            schema_version: SCHEMA_VERSION.to_string(),
            config_file: self.config_file.as_ref().map(ToString::to_string),
            effective_config: self.effective_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidflow_utils::types::ConfigSource;

    #[test]
    fn test_effective_config_keys() {
        let config = Config::default();
        let effective = config.effective_config();
        let keys: Vec<&str> = effective.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["color", "index_path", "manuscript_dir", "verbose"]);
        assert_eq!(effective["color"].value, Value::Bool(true));
        assert_eq!(effective["index_path"].value, Value::from("index.yaml"));
        assert!(
            effective
                .values()
                .all(|v| v.source == ConfigSource::Default)
        );
    }

    #[test]
    fn test_output_without_file() {
        let output = Config::default().to_output();
        assert_eq!(output.schema_version, "1");
        assert!(output.config_file.is_none());
        assert_eq!(output.effective_config.len(), 4);
    }
}
