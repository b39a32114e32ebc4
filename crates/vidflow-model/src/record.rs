use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::schedule::{DateParseError, parse_schedule};

/// Values that stand in for "nothing here" in hand-edited records.
const PLACEHOLDERS: [&str; 3] = ["", "-", "N/A"];

/// Returns true when a value is one of the "not present" spellings
/// (`""`, `"-"`, `"N/A"`).
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDERS.contains(&value)
}

/// Sponsorship details attached to a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sponsorship {
    /// Agreed amount; a placeholder means the video is not sponsored
    pub amount: String,
    /// Sponsor contact addresses to notify
    pub emails: String,
    /// Reason the sponsor blocked the video, if any
    pub blocked: String,
}

impl Sponsorship {
    /// Sponsorship only counts as active when the amount is a real value.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !is_placeholder(&self.amount)
    }

    /// Any non-empty blocked value blocks, placeholders included.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        !self.blocked.is_empty()
    }

    /// Label shown next to a blocked video.
    ///
    /// The literal reason is used when one was recorded; placeholder values
    /// collapse to the generic `(B)` marker.
    #[must_use]
    pub fn blocked_label(&self) -> Option<String> {
        if !self.is_blocked() {
            return None;
        }
        if is_placeholder(&self.blocked) {
            Some("(B)".to_string())
        } else {
            Some(self.blocked.clone())
        }
    }
}

/// One A/B title candidate. Index 1 is the title that was uploaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleVariant {
    pub index: u32,
    pub text: String,
    /// Share of watch time attributed to this variant, in percent
    pub share: f64,
}

/// One A/B thumbnail candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThumbnailVariant {
    pub index: u32,
    pub path: String,
    pub share: f64,
}

/// A short cut from the main video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShortVideo {
    pub id: String,
    pub title: String,
    pub text: String,
    pub scheduled_date: String,
    /// Platform ID, set once the short is uploaded
    pub youtube_id: String,
}

/// Per-language dubbing state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DubbingInfo {
    /// Translated title
    pub title: String,
    /// Local path of the dubbed render
    pub dubbed_video_path: String,
    /// Platform ID of the uploaded dubbed video
    pub uploaded_video_id: String,
}

/// Snapshot of a single video.
///
/// Every field defaults so partially filled records (the common case while a
/// video is still an idea) deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoRecord {
    // Identity
    pub name: String,
    pub category: String,
    /// Location of the persisted record; filled in by the store, never serialized
    #[serde(skip)]
    pub path: String,

    // Initial details
    pub project_name: String,
    #[serde(alias = "projectURL")]
    pub project_url: String,
    pub sponsorship: Sponsorship,
    pub date: String,
    pub delayed: bool,
    pub gist: String,

    // Work progress
    pub code: bool,
    pub head: bool,
    pub screen: bool,
    pub related_videos: Vec<String>,
    pub thumbnails: bool,
    pub diagrams: bool,
    pub screenshots: bool,
    pub location: String,
    pub tagline: String,
    pub tagline_ideas: String,
    pub other_logos: String,

    // Definition
    pub titles: Vec<TitleVariant>,
    pub description: String,
    pub tags: String,
    pub description_tags: String,
    pub tweet: String,
    pub animations: String,
    pub request_thumbnail: bool,

    // Post-production
    pub thumbnail: String,
    pub thumbnail_variants: Vec<ThumbnailVariant>,
    pub members: String,
    pub request_edit: bool,
    pub timecodes: String,
    pub movie: bool,
    pub slides: bool,
    pub shorts: Vec<ShortVideo>,

    // Publishing
    pub upload_video: String,
    pub video_id: String,
    pub hugo_path: String,

    // Dubbing, keyed by language code
    pub dubbing: BTreeMap<String, DubbingInfo>,

    // Post-publish
    pub blue_sky_posted: bool,
    pub linked_in_posted: bool,
    pub slack_posted: bool,
    pub hn_posted: bool,
    pub dot_posted: bool,
    pub you_tube_highlight: bool,
    pub you_tube_comment: bool,
    pub you_tube_comment_reply: bool,
    pub gde: bool,
    pub repo: String,
    pub notified_sponsors: bool,
}

impl VideoRecord {
    /// Create an empty record with identity fields set.
    #[must_use]
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            ..Self::default()
        }
    }

    /// Parse the publication date.
    ///
    /// `Ok(None)` when no date was set. Callers that only need a yes/no answer
    /// should treat an error as "not scheduled yet".
    pub fn scheduled_at(&self) -> Result<Option<NaiveDateTime>, DateParseError> {
        parse_schedule(&self.date)
    }

    /// The title variant that was actually uploaded (index 1).
    #[must_use]
    pub fn primary_title(&self) -> Option<&TitleVariant> {
        self.titles.iter().find(|t| t.index == 1)
    }

    /// Title texts that have been written, in variant order.
    #[must_use]
    pub fn filled_titles(&self) -> Vec<String> {
        let mut titles: Vec<&TitleVariant> = self
            .titles
            .iter()
            .filter(|t| !t.text.is_empty())
            .collect();
        titles.sort_by_key(|t| t.index);
        titles.into_iter().map(|t| t.text.clone()).collect()
    }

    /// Whether every short has been uploaded. Vacuously true with no shorts.
    #[must_use]
    pub fn shorts_uploaded(&self) -> bool {
        self.shorts.iter().all(|s| !s.youtube_id.is_empty())
    }

    /// Titles of the shorts cut from this video.
    #[must_use]
    pub fn short_titles(&self) -> Vec<String> {
        self.shorts.iter().map(|s| s.title.clone()).collect()
    }

    /// Paths of the thumbnail variants that exist.
    #[must_use]
    pub fn thumbnail_variant_paths(&self) -> Vec<String> {
        self.thumbnail_variants
            .iter()
            .filter(|v| !v.path.is_empty())
            .map(|v| v.path.clone())
            .collect()
    }

    /// Work-progress booleans that must all be true for material to be done.
    #[must_use]
    pub fn material_flags(&self) -> [bool; 6] {
        [
            self.code,
            self.head,
            self.screen,
            self.thumbnails,
            self.diagrams,
            self.screenshots,
        ]
    }
}
