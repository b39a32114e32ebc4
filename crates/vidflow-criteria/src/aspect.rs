use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A named field group of the production pipeline.
///
/// Aspects disambiguate identically named fields across phases when looking
/// up completion criteria, and double as the eight progress phases.
///
/// ```text
/// Initial Details → Work Progress → Definition → Post-Production
///   → Publishing → Dubbing → Post-Publish → Analysis
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Aspect {
    InitialDetails,
    WorkProgress,
    Definition,
    PostProduction,
    Publishing,
    Dubbing,
    PostPublish,
    Analysis,
}

impl Aspect {
    /// Stable key used by the criteria table and in JSON output.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::InitialDetails => "initial-details",
            Self::WorkProgress => "work-progress",
            Self::Definition => "definition",
            Self::PostProduction => "post-production",
            Self::Publishing => "publishing",
            Self::Dubbing => "dubbing",
            Self::PostPublish => "post-publish",
            Self::Analysis => "analysis",
        }
    }

    /// Human-readable name used in progress labels.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::InitialDetails => "Initial Details",
            Self::WorkProgress => "Work Progress",
            Self::Definition => "Definition",
            Self::PostProduction => "Post-Production",
            Self::Publishing => "Publishing",
            Self::Dubbing => "Dubbing",
            Self::PostPublish => "Post-Publish",
            Self::Analysis => "Analysis",
        }
    }

    /// Resolve an aspect from its key. Case-insensitive; underscores are accepted.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase().replace('_', "-");
        Self::iter().find(|a| a.key() == normalized)
    }

    /// All aspects in pipeline order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
