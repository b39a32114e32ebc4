//! Per-phase progress scoring for vidflow.
//!
//! Each of the eight production phases owns an ordered list of field checks
//! ([`checks`]). The calculator ([`calculator`]) resolves every check's
//! completion rule through `vidflow-criteria`, evaluates it against the
//! current record and folds the results into a [`ProgressScore`].
//!
//! Scores are recomputed on every call and never stored.

pub mod calculator;
pub mod checks;
pub mod score;

pub use calculator::{
    CheckOutcome, PhaseProgress, all_progress, explain, overall_progress, progress_for,
    progress_for_key,
};
pub use checks::{FieldCheck, INITIAL_DETAILS_BONUS_UNITS, phase_checks};
pub use score::ProgressScore;
pub use vidflow_criteria::Aspect as ProductionPhase;
