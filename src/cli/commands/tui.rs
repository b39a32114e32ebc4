//! TUI command implementation
//!
//! Handles `vidflow tui`.

use anyhow::Result;

use super::common::{load_catalogue, now, report_skipped};
use crate::Config;

/// Execute the tui command
pub fn execute_tui_command(config: &Config) -> Result<()> {
    // Load before touching the terminal so errors print normally
    let loaded = load_catalogue(config)?;
    crate::tui::run_tui(config, &loaded, now())?;
    report_skipped(&loaded, config.color);
    Ok(())
}
