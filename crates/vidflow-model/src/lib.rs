//! Video record model for the vidflow production pipeline.
//!
//! A [`VideoRecord`] is a flat snapshot of everything known about one video as
//! it moves through ideation, production, definition, post-production,
//! publishing, dubbing, post-publish and analysis. The record is populated by
//! the persistence layer and only read by the scoring and classification
//! crates; nothing here performs I/O.
//!
//! # Modules
//!
//! - [`record`] - The record and its nested sub-records
//! - [`schedule`] - Parsing of the fixed `YYYY-MM-DDTHH:MM` date format

pub mod record;
pub mod schedule;

pub use record::{
    DubbingInfo, ShortVideo, Sponsorship, ThumbnailVariant, TitleVariant, VideoRecord,
    is_placeholder,
};
pub use schedule::{DATE_FORMAT, DateParseError, parse_schedule};
