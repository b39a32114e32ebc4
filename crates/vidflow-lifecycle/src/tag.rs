use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// Derived lifecycle bucket of a video.
///
/// Variants are declared in pipeline order, which is also the menu order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum PhaseTag {
    /// Nothing started yet
    Ideas,
    /// Some material exists or a date was picked
    Started,
    /// Every recording and asset flag is done
    MaterialDone,
    /// Material was handed to the editor
    EditRequested,
    /// Uploaded (or due) but not confirmed live
    PublishPending,
    /// Live on the platform
    Published,
    /// Put on hold
    Delayed,
    /// Sponsored and blocked by the sponsor
    SponsoredBlocked,
}

impl PhaseTag {
    /// Stable snake-case name used in JSON output and CLI filters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ideas => "ideas",
            Self::Started => "started",
            Self::MaterialDone => "material_done",
            Self::EditRequested => "edit_requested",
            Self::PublishPending => "publish_pending",
            Self::Published => "published",
            Self::Delayed => "delayed",
            Self::SponsoredBlocked => "sponsored_blocked",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Ideas => "Ideas",
            Self::Started => "Started",
            Self::MaterialDone => "Material Done",
            Self::EditRequested => "Edit Requested",
            Self::PublishPending => "Publish Pending",
            Self::Published => "Published",
            Self::Delayed => "Delayed",
            Self::SponsoredBlocked => "Sponsored Blocked",
        }
    }

    /// All tags in menu order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl std::fmt::Display for PhaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raised when a phase name given on the command line is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown phase '{input}' (expected one of: {expected})")]
pub struct ParsePhaseTagError {
    pub input: String,
    pub expected: String,
}

impl FromStr for PhaseTag {
    type Err = ParsePhaseTagError;

    /// Accepts snake-case, kebab-case or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| ParsePhaseTagError {
                input: s.to_string(),
                expected: Self::iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
