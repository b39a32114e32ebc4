//! Config command implementation
//!
//! Handles `vidflow config [--json]`.

use anyhow::Result;

use super::json_emit::emit_config_json;
use crate::Config;

/// Execute the config command
pub fn execute_config_command(json: bool, config: &Config) -> Result<()> {
    if json {
        println!("{}", emit_config_json(&config.to_output())?);
        return Ok(());
    }

    println!("Effective configuration:");
    match &config.config_file {
        Some(path) => println!("  config file: {path}"),
        None => println!("  config file: (none)"),
    }
    println!();
    for (key, entry) in config.effective_config() {
        let value = match &entry.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        println!("  {key} = {value} ({})", entry.source);
    }

    Ok(())
}
