//! Phases command implementation
//!
//! Handles `vidflow phases` and `vidflow phases --json`.

use anyhow::Result;

use super::common::{load_catalogue, now, report_skipped, skipped_names};
use super::json_emit::emit_phase_counts_json;

use crate::presentation::{Tone, paint, tag_icon, tag_tone};
use crate::types::{PhaseCountsOutput, SCHEMA_VERSION};
use crate::{Config, count_by_phase_at};

/// Execute the phases command
pub fn execute_phases_command(json: bool, config: &Config) -> Result<()> {
    let loaded = load_catalogue(config)?;
    let counts = count_by_phase_at(&loaded.videos, now());

    if json {
        let output = PhaseCountsOutput {
            schema_version: SCHEMA_VERSION.to_string(),
            total: loaded.videos.len(),
            counts: counts
                .iter()
                .map(|(tag, count)| (tag.as_str().to_string(), *count))
                .collect(),
            skipped: skipped_names(&loaded),
        };
        println!("{}", emit_phase_counts_json(&output)?);
        return Ok(());
    }

    println!("Videos by phase ({} total)", loaded.videos.len());
    for (tag, count) in &counts {
        let tone = if *count == 0 { Tone::Muted } else { tag_tone(*tag) };
        let line = format!("  {} {:<18} {count:>4}", tag_icon(*tag), tag.display_name());
        println!("{}", paint(&line, tone, config.color));
    }
    report_skipped(&loaded, config.color);

    Ok(())
}
