//! The `(aspect, field) → criteria` lookup table.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::aspect::Aspect;

/// Rule deciding whether a single field counts as done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum CompletionCriteria {
    /// Non-empty and not `-`
    FilledOnly,
    /// Same test as `FilledOnly`; marks fields that must always be answered,
    /// even if only with `N/A`
    FilledRequired,
    /// Optional field, never blocks completion
    EmptyOrFilled,
    TrueOnly,
    /// Inverse flag: `false` is the finished state
    FalseOnly,
    /// Only required while a sponsorship is active; satisfied by a non-empty value
    ConditionalSponsorship,
    /// Only required while a sponsorship is active; satisfied by a `true` flag
    ConditionalSponsors,
    /// Non-empty and free of `FIXME:` markers
    NoFixme,
}

/// Field keys used in the criteria table and by the progress calculator.
pub mod fields {
    // initial-details
    pub const PROJECT_NAME: &str = "projectName";
    pub const PROJECT_URL: &str = "projectUrl";
    pub const SPONSORSHIP_AMOUNT: &str = "sponsorshipAmount";
    pub const SPONSORSHIP_EMAILS: &str = "sponsorshipEmails";
    pub const SPONSORSHIP_BLOCKED: &str = "sponsorshipBlocked";
    pub const DATE: &str = "date";
    pub const DELAYED: &str = "delayed";
    pub const GIST: &str = "gist";

    // work-progress
    pub const CODE: &str = "code";
    pub const HEAD: &str = "head";
    pub const SCREEN: &str = "screen";
    pub const RELATED_VIDEOS: &str = "relatedVideos";
    pub const THUMBNAILS: &str = "thumbnails";
    pub const DIAGRAMS: &str = "diagrams";
    pub const SCREENSHOTS: &str = "screenshots";
    pub const LOCATION: &str = "location";
    pub const TAGLINE: &str = "tagline";
    pub const TAGLINE_IDEAS: &str = "taglineIdeas";
    pub const OTHER_LOGOS: &str = "otherLogos";

    // definition
    pub const TITLES: &str = "titles";
    pub const DESCRIPTION: &str = "description";
    pub const TAGS: &str = "tags";
    pub const DESCRIPTION_TAGS: &str = "descriptionTags";
    pub const TWEET: &str = "tweet";
    pub const ANIMATIONS: &str = "animations";
    pub const REQUEST_THUMBNAIL: &str = "requestThumbnail";

    // post-production
    pub const THUMBNAIL: &str = "thumbnail";
    pub const THUMBNAIL_VARIANTS: &str = "thumbnailVariants";
    pub const MEMBERS: &str = "members";
    pub const REQUEST_EDIT: &str = "requestEdit";
    pub const TIMECODES: &str = "timecodes";
    pub const MOVIE: &str = "movie";
    pub const SLIDES: &str = "slides";
    pub const SHORTS: &str = "shorts";

    // publishing
    pub const UPLOAD_VIDEO: &str = "uploadVideo";
    pub const VIDEO_ID: &str = "videoId";
    pub const HUGO_PATH: &str = "hugoPath";
    pub const SHORTS_UPLOADED: &str = "shortsUploaded";

    // dubbing (per language)
    pub const DUBBED_TITLE: &str = "title";
    pub const DUBBED_VIDEO_PATH: &str = "dubbedVideoPath";
    pub const DUBBED_VIDEO_ID: &str = "uploadedVideoId";

    // post-publish
    pub const BLUE_SKY_POSTED: &str = "blueSkyPosted";
    pub const LINKED_IN_POSTED: &str = "linkedInPosted";
    pub const SLACK_POSTED: &str = "slackPosted";
    pub const HN_POSTED: &str = "hnPosted";
    pub const DOT_POSTED: &str = "dotPosted";
    pub const YOUTUBE_HIGHLIGHT: &str = "youTubeHighlight";
    pub const YOUTUBE_COMMENT: &str = "youTubeComment";
    pub const YOUTUBE_COMMENT_REPLY: &str = "youTubeCommentReply";
    pub const GDE: &str = "gde";
    pub const REPO: &str = "repo";
    pub const NOTIFIED_SPONSORS: &str = "notifiedSponsors";

    // analysis
    pub const TITLE_SHARE: &str = "titleShare";
    pub const THUMBNAIL_SHARE: &str = "thumbnailShare";
}

use CompletionCriteria::*;

/// Every known `(aspect, field)` pair and its rule.
pub const CRITERIA_TABLE: &[(Aspect, &str, CompletionCriteria)] = &[
    (Aspect::InitialDetails, fields::PROJECT_NAME, FilledOnly),
    (Aspect::InitialDetails, fields::PROJECT_URL, FilledOnly),
    (Aspect::InitialDetails, fields::SPONSORSHIP_AMOUNT, FilledRequired),
    (Aspect::InitialDetails, fields::SPONSORSHIP_EMAILS, ConditionalSponsorship),
    (Aspect::InitialDetails, fields::SPONSORSHIP_BLOCKED, FalseOnly),
    (Aspect::InitialDetails, fields::DATE, FilledOnly),
    (Aspect::InitialDetails, fields::DELAYED, FalseOnly),
    (Aspect::InitialDetails, fields::GIST, FilledOnly),
    (Aspect::WorkProgress, fields::CODE, TrueOnly),
    (Aspect::WorkProgress, fields::HEAD, TrueOnly),
    (Aspect::WorkProgress, fields::SCREEN, TrueOnly),
    (Aspect::WorkProgress, fields::RELATED_VIDEOS, FilledOnly),
    (Aspect::WorkProgress, fields::THUMBNAILS, TrueOnly),
    (Aspect::WorkProgress, fields::DIAGRAMS, TrueOnly),
    (Aspect::WorkProgress, fields::SCREENSHOTS, TrueOnly),
    (Aspect::WorkProgress, fields::LOCATION, FilledOnly),
    (Aspect::WorkProgress, fields::TAGLINE, FilledOnly),
    (Aspect::WorkProgress, fields::TAGLINE_IDEAS, FilledOnly),
    (Aspect::WorkProgress, fields::OTHER_LOGOS, FilledOnly),
    (Aspect::Definition, fields::TITLES, FilledOnly),
    (Aspect::Definition, fields::DESCRIPTION, FilledOnly),
    (Aspect::Definition, fields::TAGS, FilledOnly),
    (Aspect::Definition, fields::DESCRIPTION_TAGS, FilledOnly),
    (Aspect::Definition, fields::TWEET, FilledOnly),
    (Aspect::Definition, fields::ANIMATIONS, NoFixme),
    (Aspect::Definition, fields::REQUEST_THUMBNAIL, TrueOnly),
    (Aspect::PostProduction, fields::THUMBNAIL, FilledOnly),
    (Aspect::PostProduction, fields::THUMBNAIL_VARIANTS, EmptyOrFilled),
    (Aspect::PostProduction, fields::MEMBERS, FilledOnly),
    (Aspect::PostProduction, fields::REQUEST_EDIT, TrueOnly),
    (Aspect::PostProduction, fields::TIMECODES, NoFixme),
    (Aspect::PostProduction, fields::MOVIE, TrueOnly),
    (Aspect::PostProduction, fields::SLIDES, TrueOnly),
    (Aspect::PostProduction, fields::SHORTS, EmptyOrFilled),
    (Aspect::Publishing, fields::UPLOAD_VIDEO, FilledOnly),
    (Aspect::Publishing, fields::VIDEO_ID, FilledOnly),
    (Aspect::Publishing, fields::HUGO_PATH, FilledOnly),
    (Aspect::Publishing, fields::SHORTS_UPLOADED, TrueOnly),
    (Aspect::Dubbing, fields::DUBBED_TITLE, FilledOnly),
    (Aspect::Dubbing, fields::DUBBED_VIDEO_PATH, FilledOnly),
    (Aspect::Dubbing, fields::DUBBED_VIDEO_ID, FilledOnly),
    (Aspect::PostPublish, fields::BLUE_SKY_POSTED, TrueOnly),
    (Aspect::PostPublish, fields::LINKED_IN_POSTED, TrueOnly),
    (Aspect::PostPublish, fields::SLACK_POSTED, TrueOnly),
    (Aspect::PostPublish, fields::HN_POSTED, TrueOnly),
    (Aspect::PostPublish, fields::DOT_POSTED, TrueOnly),
    (Aspect::PostPublish, fields::YOUTUBE_HIGHLIGHT, TrueOnly),
    (Aspect::PostPublish, fields::YOUTUBE_COMMENT, TrueOnly),
    (Aspect::PostPublish, fields::YOUTUBE_COMMENT_REPLY, TrueOnly),
    (Aspect::PostPublish, fields::GDE, TrueOnly),
    (Aspect::PostPublish, fields::REPO, FilledOnly),
    (Aspect::PostPublish, fields::NOTIFIED_SPONSORS, ConditionalSponsors),
    (Aspect::Analysis, fields::TITLE_SHARE, TrueOnly),
    (Aspect::Analysis, fields::THUMBNAIL_SHARE, TrueOnly),
];

/// Look up the rule for a field within an aspect.
///
/// Unknown fields fail closed to [`CompletionCriteria::FilledOnly`].
#[must_use]
pub fn criteria_for(aspect: Aspect, field: &str) -> CompletionCriteria {
    CRITERIA_TABLE
        .iter()
        .find(|(a, f, _)| *a == aspect && *f == field)
        .map_or(FilledOnly, |(_, _, kind)| *kind)
}

/// String-keyed variant of [`criteria_for`]; unknown aspects also fail closed.
#[must_use]
pub fn criteria_for_key(aspect_key: &str, field: &str) -> CompletionCriteria {
    Aspect::from_key(aspect_key).map_or(FilledOnly, |aspect| criteria_for(aspect, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_lookups() {
        assert_eq!(
            criteria_for(Aspect::InitialDetails, fields::DELAYED),
            FalseOnly
        );
        assert_eq!(
            criteria_for(Aspect::InitialDetails, fields::SPONSORSHIP_EMAILS),
            ConditionalSponsorship
        );
        assert_eq!(
            criteria_for(Aspect::PostPublish, fields::NOTIFIED_SPONSORS),
            ConditionalSponsors
        );
        assert_eq!(criteria_for(Aspect::Definition, fields::ANIMATIONS), NoFixme);
        assert_eq!(
            criteria_for(Aspect::PostProduction, fields::SHORTS),
            EmptyOrFilled
        );
    }

    #[test]
    fn test_unknown_keys_fail_closed() {
        assert_eq!(criteria_for(Aspect::Definition, "noSuchField"), FilledOnly);
        assert_eq!(criteria_for_key("no-such-aspect", fields::DELAYED), FilledOnly);
    }

    #[test]
    fn test_same_field_resolves_per_aspect() {
        // `delayed` is only an inverse flag in initial-details
        assert_eq!(criteria_for_key("initial-details", fields::DELAYED), FalseOnly);
        assert_eq!(criteria_for_key("work-progress", fields::DELAYED), FilledOnly);
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (aspect, field, _) in CRITERIA_TABLE {
            assert!(
                seen.insert((*aspect, *field)),
                "duplicate entry for {}/{}",
                aspect.key(),
                field
            );
        }
    }

    #[test]
    fn test_every_kind_is_used() {
        use strum::IntoEnumIterator;
        for kind in CompletionCriteria::iter() {
            assert!(
                CRITERIA_TABLE.iter().any(|(_, _, k)| *k == kind),
                "{kind:?} is not referenced by the table"
            );
        }
    }
}
