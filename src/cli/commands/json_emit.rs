//! JSON emit functions for CLI output
//!
//! Every `--json` output is canonical JSON (JCS, RFC 8785) so that equal
//! data prints byte-identical output.

use anyhow::{Context, Result};

use crate::emit_jcs;
use crate::types::{ConfigOutput, PhaseCountsOutput, VideoListOutput, VideoStatusOutput};

pub fn emit_phase_counts_json(output: &PhaseCountsOutput) -> Result<String> {
    emit_jcs(output).context("Failed to emit phase counts JSON")
}

pub fn emit_video_list_json(output: &VideoListOutput) -> Result<String> {
    emit_jcs(output).context("Failed to emit video list JSON")
}

pub fn emit_video_status_json(output: &VideoStatusOutput) -> Result<String> {
    emit_jcs(output).context("Failed to emit video status JSON")
}

pub fn emit_config_json(output: &ConfigOutput) -> Result<String> {
    emit_jcs(output).context("Failed to emit config JSON")
}
