//! vidflow - phase tracking for a video production pipeline
//!
//! Every video moves through eight production phases, from the first idea to
//! post-publication analysis. vidflow answers two questions from a video
//! record's current field values alone, without any stored state flag:
//!
//! - **Where is it?** [`classify`] maps a record onto exactly one
//!   [`PhaseTag`] through an ordered, first-match rule chain.
//! - **How far along is each phase?** [`progress_for`] scores a phase as a
//!   [`ProgressScore`] `(completed, total)` using a static completion
//!   criteria table.
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! # How many videos sit in each phase
//! vidflow phases
//!
//! # Videos waiting for publication, as JSON
//! vidflow list --phase publish_pending --json
//!
//! # Per-phase progress of one record
//! vidflow status manuscript/devops/argo-cd.yaml
//!
//! # Browse videos grouped by phase
//! vidflow tui
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use vidflow::{PhaseTag, ProductionPhase, VideoRecord, classify, progress_for};
//!
//! let mut video = VideoRecord::new("Argo CD", "devops");
//! video.upload_video = "/videos/argo.mp4".to_string();
//! video.video_id = "abc123".to_string();
//!
//! assert_eq!(classify(&video), PhaseTag::Published);
//! assert_eq!(progress_for(ProductionPhase::Publishing, &video).to_string(), "3/4");
//! ```
//!
//! # JSON Contracts
//!
//! `--json` output is emitted in JCS (RFC 8785) canonical form through
//! [`emit_jcs`].

// ============================================================================
// Core model and engine
// ============================================================================

pub use vidflow_criteria::{
    Aspect, CompletionCriteria, FieldValue, criteria_for, criteria_for_key, is_complete,
};
pub use vidflow_lifecycle::{
    ClassifyContext, PHASE_RULES, PhaseRule, PhaseTag, classify, classify_at, count_by_phase,
    count_by_phase_at, group_by_phase_at,
};
pub use vidflow_model::{DateParseError, Sponsorship, VideoRecord};
pub use vidflow_progress::{
    PhaseProgress, ProductionPhase, ProgressScore, all_progress, explain, overall_progress,
    progress_for, progress_for_key,
};

// ============================================================================
// Application surface
// ============================================================================

pub use vidflow_config::{CliArgs, Config};
pub use vidflow_store::{IndexEntry, VideoStore};
pub use vidflow_utils::{
    ExitCode, StoreError, UserFriendlyError, VidflowError, emit_jcs, error, types,
};

pub mod cli;
pub mod error_reporter;
pub mod presentation;
pub mod tui;
