//! Phase progress calculator.

use serde::{Deserialize, Serialize};
use vidflow_criteria::{Aspect, CompletionCriteria, criteria_for, is_complete};
use vidflow_model::VideoRecord;

use crate::checks::{FieldCheck, phase_checks};
use crate::score::ProgressScore;

/// Evaluation of a single check, for detailed views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub field: String,
    pub criteria: CompletionCriteria,
    pub complete: bool,
    pub bonus: bool,
}

/// Score of one phase, paired with the phase it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub phase: Aspect,
    #[serde(flatten)]
    pub score: ProgressScore,
}

impl PhaseProgress {
    /// `"<Phase Name> (<completed>/<total>)"`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.phase.display_name(), self.score)
    }
}

fn evaluate(phase: Aspect, check: &FieldCheck, video: &VideoRecord) -> (CompletionCriteria, bool) {
    let kind = criteria_for(phase, check.field);
    let done = is_complete(kind, &check.value, Some(&video.sponsorship.amount));
    (kind, done)
}

/// Score one phase of a record.
#[must_use]
pub fn progress_for(phase: Aspect, video: &VideoRecord) -> ProgressScore {
    let mut score = ProgressScore::default();
    for check in phase_checks(phase, video) {
        let (_, done) = evaluate(phase, &check, video);
        score.record(done);
    }
    score
}

/// Score a phase named by its key (`"post-production"`, ...).
///
/// Returns `None` for an unknown phase name.
#[must_use]
pub fn progress_for_key(phase_key: &str, video: &VideoRecord) -> Option<ProgressScore> {
    Aspect::from_key(phase_key).map(|phase| progress_for(phase, video))
}

/// Scores for all eight phases, in pipeline order.
#[must_use]
pub fn all_progress(video: &VideoRecord) -> Vec<PhaseProgress> {
    Aspect::all()
        .map(|phase| PhaseProgress {
            phase,
            score: progress_for(phase, video),
        })
        .collect()
}

/// Sum of every phase score.
#[must_use]
pub fn overall_progress(video: &VideoRecord) -> ProgressScore {
    all_progress(video)
        .into_iter()
        .fold(ProgressScore::default(), |acc, p| acc + p.score)
}

/// Per-check breakdown of a phase score.
#[must_use]
pub fn explain(phase: Aspect, video: &VideoRecord) -> Vec<CheckOutcome> {
    phase_checks(phase, video)
        .iter()
        .map(|check| {
            let (criteria, complete) = evaluate(phase, check, video);
            CheckOutcome {
                field: check.label(),
                criteria,
                complete,
                bonus: check.bonus,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidflow_criteria::fields;
    use vidflow_model::{DubbingInfo, ShortVideo, ThumbnailVariant, TitleVariant};

    fn score(phase: Aspect, video: &VideoRecord) -> (u32, u32) {
        let s = progress_for(phase, video);
        (s.completed(), s.total())
    }

    #[test]
    fn test_fresh_record_initial_details() {
        let video = VideoRecord::new("idea", "dev");
        // emails, blocked and delayed units are satisfied by default
        assert_eq!(score(Aspect::InitialDetails, &video), (3, 8));
    }

    #[test]
    fn test_delayed_is_inverse() {
        let mut video = VideoRecord::default();
        let delayed = |v: &VideoRecord| {
            explain(Aspect::InitialDetails, v)
                .into_iter()
                .find(|o| o.field == "delayed")
                .unwrap()
                .complete
        };
        assert!(delayed(&video));
        video.delayed = true;
        assert!(!delayed(&video));
        assert_eq!(score(Aspect::InitialDetails, &video), (2, 8));
    }

    #[test]
    fn test_sponsorship_fan_out() {
        let mut video = VideoRecord::default();
        video.sponsorship.amount = "$100".to_string();
        // amount filled (+1), emails now required and missing (-1)
        assert_eq!(score(Aspect::InitialDetails, &video), (3, 8));

        video.sponsorship.emails = "a@b.com".to_string();
        assert_eq!(score(Aspect::InitialDetails, &video), (4, 8));

        video.sponsorship.blocked = "Legal".to_string();
        assert_eq!(score(Aspect::InitialDetails, &video), (3, 8));
    }

    #[test]
    fn test_complete_initial_details() {
        let mut video = VideoRecord::default();
        video.project_name = "Argo CD".to_string();
        video.project_url = "https://argoproj.io".to_string();
        video.sponsorship.amount = "N/A".to_string();
        video.date = "2024-05-01T16:00".to_string();
        video.gist = "manuscript/devops/argo.md".to_string();
        let s = progress_for(Aspect::InitialDetails, &video);
        assert_eq!(s, ProgressScore::new(8, 8));
        assert!(s.is_complete());
    }

    #[test]
    fn test_definition_fixme_animations() {
        let mut video = VideoRecord::default();
        video.titles = vec![TitleVariant {
            index: 1,
            text: "Stop using Helm".to_string(),
            share: 0.0,
        }];
        video.animations = "- Logo: FIXME:".to_string();
        assert_eq!(score(Aspect::Definition, &video), (1, 7));

        video.animations = "- Logo: argo".to_string();
        assert_eq!(score(Aspect::Definition, &video), (2, 7));
    }

    #[test]
    fn test_post_production_optional_lists() {
        let mut video = VideoRecord::default();
        // thumbnail variants and shorts never block
        assert_eq!(score(Aspect::PostProduction, &video), (2, 8));

        video.thumbnail_variants.push(ThumbnailVariant {
            index: 1,
            path: "thumb-a.png".to_string(),
            share: 0.0,
        });
        assert_eq!(score(Aspect::PostProduction, &video), (2, 8));
    }

    #[test]
    fn test_whitespace_values_are_filled() {
        let mut video = VideoRecord::default();
        video.upload_video = "/v.mp4".to_string();
        video.video_id = " ".to_string();
        let video_id = explain(Aspect::Publishing, &video)
            .into_iter()
            .find(|o| o.field == fields::VIDEO_ID)
            .unwrap();
        assert!(video_id.complete);

        // a blank amount still marks the video as sponsored
        let mut sponsored = VideoRecord::default();
        sponsored.sponsorship.amount = " ".to_string();
        assert_eq!(score(Aspect::InitialDetails, &sponsored), (3, 8));
    }

    #[test]
    fn test_publishing_shorts_upload() {
        let mut video = VideoRecord::default();
        assert_eq!(score(Aspect::Publishing, &video), (1, 4));

        video.shorts.push(ShortVideo {
            title: "Tip".to_string(),
            ..ShortVideo::default()
        });
        assert_eq!(score(Aspect::Publishing, &video), (0, 4));

        video.upload_video = "/v.mp4".to_string();
        video.video_id = "abc123".to_string();
        video.hugo_path = "content/argo.md".to_string();
        video.shorts[0].youtube_id = "s1".to_string();
        assert_eq!(score(Aspect::Publishing, &video), (4, 4));
    }

    #[test]
    fn test_dubbing_scales_with_languages() {
        let mut video = VideoRecord::default();
        assert_eq!(score(Aspect::Dubbing, &video), (0, 0));

        video.dubbing.insert(
            "es".to_string(),
            DubbingInfo {
                title: "Hola".to_string(),
                dubbed_video_path: "/es.mp4".to_string(),
                uploaded_video_id: String::new(),
            },
        );
        assert_eq!(score(Aspect::Dubbing, &video), (2, 3));
    }

    #[test]
    fn test_post_publish_sponsor_notification() {
        let mut video = VideoRecord::default();
        // not sponsored: notification unit already satisfied
        assert_eq!(score(Aspect::PostPublish, &video), (1, 11));

        video.sponsorship.amount = "$500".to_string();
        assert_eq!(score(Aspect::PostPublish, &video), (0, 11));

        video.notified_sponsors = true;
        video.repo = "N/A".to_string();
        assert_eq!(score(Aspect::PostPublish, &video), (2, 11));
    }

    #[test]
    fn test_analysis_shares() {
        let mut video = VideoRecord::default();
        assert_eq!(score(Aspect::Analysis, &video), (0, 0));

        video.titles = vec![
            TitleVariant {
                index: 1,
                text: "A".to_string(),
                share: 55.0,
            },
            TitleVariant {
                index: 2,
                text: "B".to_string(),
                share: 0.0,
            },
        ];
        assert_eq!(score(Aspect::Analysis, &video), (1, 2));
    }

    #[test]
    fn test_progress_for_key() {
        let video = VideoRecord::default();
        assert_eq!(
            progress_for_key("publishing", &video),
            Some(ProgressScore::new(1, 4))
        );
        assert_eq!(progress_for_key("editing", &video), None);
    }

    #[test]
    fn test_overall_is_sum_of_phases() {
        let video = VideoRecord::default();
        let sum = all_progress(&video)
            .iter()
            .fold(ProgressScore::default(), |acc, p| acc + p.score);
        assert_eq!(overall_progress(&video), sum);
        assert_eq!(all_progress(&video).len(), 8);
    }

    #[test]
    fn test_label_format() {
        let progress = PhaseProgress {
            phase: Aspect::PostProduction,
            score: ProgressScore::new(3, 8),
        };
        assert_eq!(progress.label(), "Post-Production (3/8)");
    }

    #[test]
    fn test_phase_progress_json_is_flat() {
        let progress = PhaseProgress {
            phase: Aspect::WorkProgress,
            score: ProgressScore::new(1, 11),
        };
        let json = serde_json::to_value(progress).unwrap();
        assert_eq!(json["phase"], "work-progress");
        assert_eq!(json["completed"], 1);
        assert_eq!(json["total"], 11);
    }
}
