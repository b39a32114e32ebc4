//! Status command implementation
//!
//! Handles `vidflow status <path> [--explain] [--json]`.

use anyhow::Result;
use camino::Utf8Path;
use tracing::debug;

use super::common::{now, open_store};
use super::json_emit::emit_video_status_json;

use crate::presentation::{
    Tone, overall_label, paint, progress_line, progress_tone, tag_icon, tag_tone, uploaded_title,
    video_title,
};
use crate::types::{PhaseScoreInfo, SCHEMA_VERSION, VideoStatusOutput};
use crate::{
    Config, PhaseProgress, ProgressScore, UserFriendlyError, VideoRecord, VidflowError,
    all_progress, classify_at, explain, overall_progress,
};

fn score_info(phase: &str, label: String, score: ProgressScore) -> PhaseScoreInfo {
    PhaseScoreInfo {
        phase: phase.to_string(),
        label,
        completed: score.completed(),
        total: score.total(),
        complete: score.is_complete(),
    }
}

/// Load a single record. Name and category fall back to the file stem and
/// the parent directory when the record leaves them empty.
fn load_record(path: &Utf8Path, config: &Config) -> Result<VideoRecord> {
    let mut video = open_store(config)
        .load_video(path)
        .map_err(VidflowError::from)?;
    if video.name.trim().is_empty() {
        video.name = path.file_stem().unwrap_or_default().to_string();
    }
    if video.category.trim().is_empty() {
        video.category = path
            .parent()
            .and_then(Utf8Path::file_name)
            .unwrap_or_default()
            .to_string();
    }
    Ok(video)
}

/// Execute the status command
pub fn execute_status_command(
    path: &Utf8Path,
    explain_checks: bool,
    json: bool,
    config: &Config,
) -> Result<()> {
    let video = load_record(path, config)?;
    let tag = classify_at(&video, now());
    let phases = all_progress(&video);
    let overall = overall_progress(&video);

    if let Err(err) = video.scheduled_at() {
        let warning = VidflowError::from(err);
        debug!(%warning, "Unparsable publication date");
        eprintln!(
            "{}",
            paint(
                &format!("⚠ {}; treated as not scheduled", warning.user_message()),
                Tone::Pending,
                config.color
            )
        );
    }

    if json {
        let output = VideoStatusOutput {
            schema_version: SCHEMA_VERSION.to_string(),
            name: video.name.clone(),
            category: video.category.clone(),
            path: video.path.clone(),
            phase: tag.as_str().to_string(),
            blocked: video.sponsorship.blocked_label(),
            phases: phases
                .iter()
                .map(|p| score_info(p.phase.key(), p.label(), p.score))
                .collect(),
            overall: score_info("overall", format!("Overall ({overall})"), overall),
        };
        println!("{}", emit_video_status_json(&output)?);
        return Ok(());
    }

    println!("{} [{}]", video_title(&video), video.category);
    println!(
        "Phase: {}",
        paint(
            &format!("{} {}", tag_icon(tag), tag.display_name()),
            tag_tone(tag),
            config.color
        )
    );
    println!("Title: {}", uploaded_title(&video));
    println!();
    for progress in &phases {
        println!("  {}", progress_line(progress, config.color));
        if explain_checks {
            print_checks(progress, &video, config.color);
        }
    }
    println!();
    println!(
        "  {}",
        paint(&overall_label(overall), progress_tone(overall), config.color)
    );

    Ok(())
}

fn print_checks(progress: &PhaseProgress, video: &VideoRecord, color: bool) {
    for outcome in explain(progress.phase, video) {
        let (mark, tone) = if outcome.complete {
            ("✓", Tone::Done)
        } else {
            ("✗", Tone::Muted)
        };
        let bonus = if outcome.bonus { " (bonus)" } else { "" };
        println!(
            "      {} {:<28} {:?}{bonus}",
            paint(mark, tone, color),
            outcome.field,
            outcome.criteria
        );
    }
}
