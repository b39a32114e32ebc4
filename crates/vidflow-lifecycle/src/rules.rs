//! The ordered rule chain.
//!
//! Order is business precedence: the first rule whose predicate holds wins.
//! Reordering entries silently moves videos between menu buckets, so the
//! chain is kept as data that tests can inspect.

use chrono::NaiveDateTime;
use vidflow_model::VideoRecord;

use crate::tag::PhaseTag;

/// Inputs to classification besides the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyContext {
    /// Moment against which the publication date is compared
    pub as_of: NaiveDateTime,
}

impl ClassifyContext {
    #[must_use]
    pub const fn new(as_of: NaiveDateTime) -> Self {
        Self { as_of }
    }
}

/// A `(tag, predicate)` pair of the chain.
#[derive(Clone, Copy)]
pub struct PhaseRule {
    pub tag: PhaseTag,
    pub matches: fn(&VideoRecord, &ClassifyContext) -> bool,
}

impl std::fmt::Debug for PhaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseRule").field("tag", &self.tag).finish()
    }
}

/// The classification chain, highest precedence first.
pub const PHASE_RULES: [PhaseRule; 8] = [
    PhaseRule {
        tag: PhaseTag::SponsoredBlocked,
        matches: is_sponsored_blocked,
    },
    PhaseRule {
        tag: PhaseTag::Published,
        matches: is_published,
    },
    PhaseRule {
        tag: PhaseTag::PublishPending,
        matches: is_publish_pending,
    },
    PhaseRule {
        tag: PhaseTag::EditRequested,
        matches: is_edit_requested,
    },
    PhaseRule {
        tag: PhaseTag::MaterialDone,
        matches: is_material_done,
    },
    PhaseRule {
        tag: PhaseTag::Delayed,
        matches: is_delayed,
    },
    PhaseRule {
        tag: PhaseTag::Started,
        matches: is_started,
    },
    PhaseRule {
        tag: PhaseTag::Ideas,
        matches: always,
    },
];

fn present(value: &str) -> bool {
    !value.is_empty()
}

fn filled(value: &str) -> bool {
    present(value) && value != "-"
}

/// Publication date has passed. Unparsable dates are never due.
fn is_due(video: &VideoRecord, ctx: &ClassifyContext) -> bool {
    matches!(video.scheduled_at(), Ok(Some(when)) if when <= ctx.as_of)
}

fn is_sponsored_blocked(video: &VideoRecord, _: &ClassifyContext) -> bool {
    video.sponsorship.is_active() && video.sponsorship.is_blocked()
}

fn is_published(video: &VideoRecord, _: &ClassifyContext) -> bool {
    present(&video.video_id) && present(&video.upload_video)
}

fn is_publish_pending(video: &VideoRecord, ctx: &ClassifyContext) -> bool {
    !present(&video.video_id) && (present(&video.upload_video) || is_due(video, ctx))
}

fn is_edit_requested(video: &VideoRecord, _: &ClassifyContext) -> bool {
    video.request_edit
}

fn is_material_done(video: &VideoRecord, _: &ClassifyContext) -> bool {
    video.material_flags().iter().all(|done| *done)
}

fn is_delayed(video: &VideoRecord, _: &ClassifyContext) -> bool {
    video.delayed
}

fn is_started(video: &VideoRecord, _: &ClassifyContext) -> bool {
    video.material_flags().iter().any(|done| *done)
        || !video.related_videos.is_empty()
        || [
            &video.location,
            &video.tagline,
            &video.tagline_ideas,
            &video.other_logos,
        ]
        .iter()
        .any(|value| filled(value))
        || present(&video.date)
}

fn always(_: &VideoRecord, _: &ClassifyContext) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_chain_covers_every_tag_once() {
        let tags: HashSet<PhaseTag> = PHASE_RULES.iter().map(|r| r.tag).collect();
        assert_eq!(tags.len(), 8);
        assert_eq!(tags, PhaseTag::all().collect::<HashSet<_>>());
    }

    #[test]
    fn test_chain_order() {
        let order: Vec<PhaseTag> = PHASE_RULES.iter().map(|r| r.tag).collect();
        assert_eq!(
            order,
            vec![
                PhaseTag::SponsoredBlocked,
                PhaseTag::Published,
                PhaseTag::PublishPending,
                PhaseTag::EditRequested,
                PhaseTag::MaterialDone,
                PhaseTag::Delayed,
                PhaseTag::Started,
                PhaseTag::Ideas,
            ]
        );
    }

    #[test]
    fn test_last_rule_is_unconditional() {
        let ctx = ClassifyContext::new(NaiveDateTime::default());
        let last = PHASE_RULES[PHASE_RULES.len() - 1];
        assert_eq!(last.tag, PhaseTag::Ideas);
        assert!((last.matches)(&VideoRecord::default(), &ctx));
    }

    #[test]
    fn test_placeholder_strings_do_not_start_work() {
        let ctx = ClassifyContext::new(NaiveDateTime::default());
        let mut video = VideoRecord::default();
        video.tagline = "-".to_string();
        assert!(!is_started(&video, &ctx));
        video.tagline = "GitOps all the things".to_string();
        assert!(is_started(&video, &ctx));
    }
}
