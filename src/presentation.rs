//! Presentation mapping for phases and scores.
//!
//! The engine returns plain data. Everything visual (colors, icons, blocked
//! suffixes) is decided here through lookup tables, for both the line-based
//! CLI output and the TUI.

use crossterm::style::Stylize;
use vidflow_lifecycle::PhaseTag;
use vidflow_model::VideoRecord;
use vidflow_progress::{PhaseProgress, ProgressScore};

/// Semantic color of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Done,
    Pending,
    Alert,
    Info,
    Muted,
}

impl Tone {
    #[must_use]
    pub const fn tui_color(self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Done => Color::Green,
            Self::Pending => Color::Yellow,
            Self::Alert => Color::Red,
            Self::Info => Color::Cyan,
            Self::Muted => Color::DarkGray,
        }
    }

    #[must_use]
    pub const fn term_color(self) -> crossterm::style::Color {
        use crossterm::style::Color;
        match self {
            Self::Done => Color::Green,
            Self::Pending => Color::Yellow,
            Self::Alert => Color::Red,
            Self::Info => Color::Cyan,
            Self::Muted => Color::DarkGrey,
        }
    }
}

/// Menu icon and tone per phase tag, in menu order.
pub const PHASE_TAG_STYLES: [(PhaseTag, &str, Tone); 8] = [
    (PhaseTag::Ideas, "○", Tone::Muted),
    (PhaseTag::Started, "◔", Tone::Pending),
    (PhaseTag::MaterialDone, "◑", Tone::Pending),
    (PhaseTag::EditRequested, "◕", Tone::Info),
    (PhaseTag::PublishPending, "⋯", Tone::Info),
    (PhaseTag::Published, "✓", Tone::Done),
    (PhaseTag::Delayed, "⏸", Tone::Muted),
    (PhaseTag::SponsoredBlocked, "✗", Tone::Alert),
];

fn tag_style(tag: PhaseTag) -> (&'static str, Tone) {
    PHASE_TAG_STYLES
        .iter()
        .find(|(t, _, _)| *t == tag)
        .map_or(("?", Tone::Muted), |(_, icon, tone)| (*icon, *tone))
}

#[must_use]
pub fn tag_icon(tag: PhaseTag) -> &'static str {
    tag_style(tag).0
}

#[must_use]
pub fn tag_tone(tag: PhaseTag) -> Tone {
    tag_style(tag).1
}

/// Green once every task of a phase that has tasks is done, amber otherwise.
#[must_use]
pub fn progress_tone(score: ProgressScore) -> Tone {
    if score.is_complete() {
        Tone::Done
    } else {
        Tone::Pending
    }
}

/// Video name with the sponsor block marker appended, e.g. `Argo CD (Legal)`.
#[must_use]
pub fn video_title(video: &VideoRecord) -> String {
    match video.sponsorship.blocked_label() {
        Some(label) if label.starts_with('(') => format!("{} {label}", video.name),
        Some(label) => format!("{} ({label})", video.name),
        None => video.name.clone(),
    }
}

/// Text of the uploaded title variant, `-` when it has not been written.
#[must_use]
pub fn uploaded_title(video: &VideoRecord) -> &str {
    video
        .primary_title()
        .map(|t| t.text.as_str())
        .filter(|text| !text.is_empty())
        .unwrap_or("-")
}

/// `"Overall (<completed>/<total>, <percent>%)"`
#[must_use]
pub fn overall_label(score: ProgressScore) -> String {
    format!("Overall ({score}, {}%)", score.percent())
}

/// Apply a tone to text for terminal output.
#[must_use]
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if color {
        format!("{}", text.with(tone.term_color()))
    } else {
        text.to_string()
    }
}

/// `"<Phase Name> (<completed>/<total>)"`, colored by completion.
#[must_use]
pub fn progress_line(progress: &PhaseProgress, color: bool) -> String {
    paint(&progress.label(), progress_tone(progress.score), color)
}
