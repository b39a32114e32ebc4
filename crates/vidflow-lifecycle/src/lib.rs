//! Lifecycle phase classification for vidflow.
//!
//! A video's phase is never stored. It is derived on demand from the record's
//! current field values by walking an ordered list of rules and taking the
//! first match ([`rules::PHASE_RULES`]). The last rule always matches, so
//! every record lands in exactly one [`PhaseTag`].
//!
//! # Precedence
//!
//! ```text
//! SponsoredBlocked → Published → PublishPending → EditRequested
//!   → MaterialDone → Delayed → Started → Ideas
//! ```
//!
//! # Modules
//!
//! - [`tag`] - The eight phase tags
//! - [`rules`] - The ordered rule chain and its predicates
//! - [`classifier`] - Single-record classification
//! - [`histogram`] - Counting and grouping over collections

pub mod classifier;
pub mod histogram;
pub mod rules;
pub mod tag;

pub use classifier::{classify, classify_at, matching_rules};
pub use histogram::{count_by_phase, count_by_phase_at, group_by_phase_at};
pub use rules::{ClassifyContext, PHASE_RULES, PhaseRule};
pub use tag::{ParsePhaseTagError, PhaseTag};
