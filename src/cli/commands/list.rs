//! List command implementation
//!
//! Handles `vidflow list [--phase <tag>] [--json]`.

use anyhow::Result;

use super::common::{load_catalogue, now, report_skipped, skipped_names};
use super::json_emit::emit_video_list_json;

use crate::presentation::{Tone, paint, tag_icon, tag_tone, video_title};
use crate::types::{SCHEMA_VERSION, VideoListOutput, VideoSummary};
use crate::{Config, PhaseTag, VidflowError, classify_at};

/// Parse a phase filter given on the command line.
pub fn parse_phase_filter(input: &str) -> Result<PhaseTag, VidflowError> {
    input
        .parse::<PhaseTag>()
        .map_err(|e| VidflowError::UnknownPhase {
            input: e.input,
            expected: e.expected,
        })
}

/// Execute the list command
pub fn execute_list_command(phase: Option<&str>, json: bool, config: &Config) -> Result<()> {
    let filter = phase.map(parse_phase_filter).transpose()?;
    let loaded = load_catalogue(config)?;
    let as_of = now();

    let rows: Vec<_> = loaded
        .videos
        .iter()
        .map(|video| (video, classify_at(video, as_of)))
        .filter(|(_, tag)| filter.is_none_or(|wanted| wanted == *tag))
        .collect();

    if json {
        let output = VideoListOutput {
            schema_version: SCHEMA_VERSION.to_string(),
            videos: rows
                .iter()
                .map(|(video, tag)| VideoSummary {
                    name: video.name.clone(),
                    category: video.category.clone(),
                    phase: tag.as_str().to_string(),
                    blocked: video.sponsorship.blocked_label(),
                })
                .collect(),
            skipped: skipped_names(&loaded),
        };
        println!("{}", emit_video_list_json(&output)?);
        return Ok(());
    }

    if rows.is_empty() {
        match filter {
            Some(tag) => println!("No videos in phase {tag}"),
            None => println!("No videos indexed"),
        }
    }
    for (video, tag) in &rows {
        println!(
            "{} {}  {}  {}",
            paint(tag_icon(*tag), tag_tone(*tag), config.color),
            video_title(video),
            paint(&format!("[{}]", video.category), Tone::Info, config.color),
            paint(tag.display_name(), tag_tone(*tag), config.color),
        );
    }
    report_skipped(&loaded, config.color);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_phase_filter() {
        assert_eq!(
            parse_phase_filter("edit-requested").unwrap(),
            PhaseTag::EditRequested
        );
        let err = parse_phase_filter("editing").unwrap_err();
        assert!(matches!(err, VidflowError::UnknownPhase { .. }));
    }
}
