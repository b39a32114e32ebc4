//! Counting and grouping records by phase.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use vidflow_model::VideoRecord;

use crate::classifier::classify_at;
use crate::tag::PhaseTag;

fn empty_histogram() -> BTreeMap<PhaseTag, usize> {
    PhaseTag::all().map(|tag| (tag, 0)).collect()
}

/// Number of records in each phase, as of `as_of`.
///
/// Every tag is present in the result, zero-valued when no record maps to it.
#[must_use]
pub fn count_by_phase_at<'a, I>(videos: I, as_of: NaiveDateTime) -> BTreeMap<PhaseTag, usize>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    let mut counts = empty_histogram();
    for video in videos {
        *counts.entry(classify_at(video, as_of)).or_default() += 1;
    }
    counts
}

/// [`count_by_phase_at`] against the local wall clock.
#[must_use]
pub fn count_by_phase<'a, I>(videos: I) -> BTreeMap<PhaseTag, usize>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    count_by_phase_at(videos, Local::now().naive_local())
}

/// Records bucketed by phase, input order preserved within each bucket.
///
/// Only non-empty buckets appear.
#[must_use]
pub fn group_by_phase_at<'a, I>(
    videos: I,
    as_of: NaiveDateTime,
) -> BTreeMap<PhaseTag, Vec<&'a VideoRecord>>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    let mut groups: BTreeMap<PhaseTag, Vec<&'a VideoRecord>> = BTreeMap::new();
    for video in videos {
        groups
            .entry(classify_at(video, as_of))
            .or_default()
            .push(video);
    }
    groups
}
