//! Single-record classification.

use chrono::{Local, NaiveDateTime};
use vidflow_model::VideoRecord;

use crate::rules::{ClassifyContext, PHASE_RULES};
use crate::tag::PhaseTag;

/// Classify against an explicit reference time.
///
/// Same record and same `as_of` always yield the same tag.
#[must_use]
pub fn classify_at(video: &VideoRecord, as_of: NaiveDateTime) -> PhaseTag {
    let ctx = ClassifyContext::new(as_of);
    PHASE_RULES
        .iter()
        .find(|rule| (rule.matches)(video, &ctx))
        .map_or(PhaseTag::Ideas, |rule| rule.tag)
}

/// Classify against the local wall clock.
#[must_use]
pub fn classify(video: &VideoRecord) -> PhaseTag {
    classify_at(video, Local::now().naive_local())
}

/// Every tag whose rule holds, in precedence order. The first entry is the
/// classification; the rest show what it shadowed.
#[must_use]
pub fn matching_rules(video: &VideoRecord, as_of: NaiveDateTime) -> Vec<PhaseTag> {
    let ctx = ClassifyContext::new(as_of);
    PHASE_RULES
        .iter()
        .filter(|rule| (rule.matches)(video, &ctx))
        .map(|rule| rule.tag)
        .collect()
}
