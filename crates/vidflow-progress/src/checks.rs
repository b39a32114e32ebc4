//! Ordered field lists for each production phase.

use vidflow_criteria::{Aspect, FieldValue, fields};
use vidflow_model::VideoRecord;

/// Extra tasks Initial Details carries beyond its raw field count: the
/// sponsorship amount fans out into separately gated emails and blocked
/// checks, and the delayed flag is scored inversely.
pub const INITIAL_DETAILS_BONUS_UNITS: usize = 3;

/// One field evaluated for a phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: &'static str,
    pub value: FieldValue,
    /// Distinguishes repeated checks, e.g. the language of a dubbing entry
    pub qualifier: Option<String>,
    /// Counted as a bonus task unit rather than a raw field
    pub bonus: bool,
}

impl FieldCheck {
    fn new(field: &'static str, value: impl Into<FieldValue>) -> Self {
        Self {
            field,
            value: value.into(),
            qualifier: None,
            bonus: false,
        }
    }

    fn bonus(field: &'static str, value: impl Into<FieldValue>) -> Self {
        Self {
            bonus: true,
            ..Self::new(field, value)
        }
    }

    fn qualified(field: &'static str, qualifier: String, value: impl Into<FieldValue>) -> Self {
        Self {
            qualifier: Some(qualifier),
            ..Self::new(field, value)
        }
    }

    /// Field key with its qualifier, e.g. `es.dubbedVideoPath`.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.qualifier {
            Some(q) => format!("{q}.{}", self.field),
            None => self.field.to_string(),
        }
    }
}

/// Build the ordered checks for a phase from the current record.
#[must_use]
pub fn phase_checks(phase: Aspect, video: &VideoRecord) -> Vec<FieldCheck> {
    match phase {
        Aspect::InitialDetails => initial_details(video),
        Aspect::WorkProgress => work_progress(video),
        Aspect::Definition => definition(video),
        Aspect::PostProduction => post_production(video),
        Aspect::Publishing => publishing(video),
        Aspect::Dubbing => dubbing(video),
        Aspect::PostPublish => post_publish(video),
        Aspect::Analysis => analysis(video),
    }
}

fn initial_details(video: &VideoRecord) -> Vec<FieldCheck> {
    vec![
        FieldCheck::new(fields::PROJECT_NAME, &video.project_name),
        FieldCheck::new(fields::PROJECT_URL, &video.project_url),
        FieldCheck::new(fields::SPONSORSHIP_AMOUNT, &video.sponsorship.amount),
        FieldCheck::new(fields::DATE, &video.date),
        FieldCheck::new(fields::GIST, &video.gist),
        FieldCheck::bonus(fields::SPONSORSHIP_EMAILS, &video.sponsorship.emails),
        FieldCheck::bonus(fields::SPONSORSHIP_BLOCKED, video.sponsorship.is_blocked()),
        FieldCheck::bonus(fields::DELAYED, video.delayed),
    ]
}

fn work_progress(video: &VideoRecord) -> Vec<FieldCheck> {
    vec![
        FieldCheck::new(fields::CODE, video.code),
        FieldCheck::new(fields::HEAD, video.head),
        FieldCheck::new(fields::SCREEN, video.screen),
        FieldCheck::new(fields::RELATED_VIDEOS, video.related_videos.clone()),
        FieldCheck::new(fields::THUMBNAILS, video.thumbnails),
        FieldCheck::new(fields::DIAGRAMS, video.diagrams),
        FieldCheck::new(fields::SCREENSHOTS, video.screenshots),
        FieldCheck::new(fields::LOCATION, &video.location),
        FieldCheck::new(fields::TAGLINE, &video.tagline),
        FieldCheck::new(fields::TAGLINE_IDEAS, &video.tagline_ideas),
        FieldCheck::new(fields::OTHER_LOGOS, &video.other_logos),
    ]
}

fn definition(video: &VideoRecord) -> Vec<FieldCheck> {
    vec![
        FieldCheck::new(fields::TITLES, video.filled_titles()),
        FieldCheck::new(fields::DESCRIPTION, &video.description),
        FieldCheck::new(fields::TAGS, &video.tags),
        FieldCheck::new(fields::DESCRIPTION_TAGS, &video.description_tags),
        FieldCheck::new(fields::TWEET, &video.tweet),
        FieldCheck::new(fields::ANIMATIONS, &video.animations),
        FieldCheck::new(fields::REQUEST_THUMBNAIL, video.request_thumbnail),
    ]
}

fn post_production(video: &VideoRecord) -> Vec<FieldCheck> {
    vec![
        FieldCheck::new(fields::THUMBNAIL, &video.thumbnail),
        FieldCheck::new(fields::THUMBNAIL_VARIANTS, video.thumbnail_variant_paths()),
        FieldCheck::new(fields::MEMBERS, &video.members),
        FieldCheck::new(fields::REQUEST_EDIT, video.request_edit),
        FieldCheck::new(fields::TIMECODES, &video.timecodes),
        FieldCheck::new(fields::MOVIE, video.movie),
        FieldCheck::new(fields::SLIDES, video.slides),
        FieldCheck::new(fields::SHORTS, video.short_titles()),
    ]
}

fn publishing(video: &VideoRecord) -> Vec<FieldCheck> {
    vec![
        FieldCheck::new(fields::UPLOAD_VIDEO, &video.upload_video),
        FieldCheck::new(fields::VIDEO_ID, &video.video_id),
        FieldCheck::new(fields::HUGO_PATH, &video.hugo_path),
        FieldCheck::new(fields::SHORTS_UPLOADED, video.shorts_uploaded()),
    ]
}

fn dubbing(video: &VideoRecord) -> Vec<FieldCheck> {
    video
        .dubbing
        .iter()
        .flat_map(|(language, info)| {
            [
                FieldCheck::qualified(fields::DUBBED_TITLE, language.clone(), &info.title),
                FieldCheck::qualified(
                    fields::DUBBED_VIDEO_PATH,
                    language.clone(),
                    &info.dubbed_video_path,
                ),
                FieldCheck::qualified(
                    fields::DUBBED_VIDEO_ID,
                    language.clone(),
                    &info.uploaded_video_id,
                ),
            ]
        })
        .collect()
}

fn post_publish(video: &VideoRecord) -> Vec<FieldCheck> {
    vec![
        FieldCheck::new(fields::BLUE_SKY_POSTED, video.blue_sky_posted),
        FieldCheck::new(fields::LINKED_IN_POSTED, video.linked_in_posted),
        FieldCheck::new(fields::SLACK_POSTED, video.slack_posted),
        FieldCheck::new(fields::HN_POSTED, video.hn_posted),
        FieldCheck::new(fields::DOT_POSTED, video.dot_posted),
        FieldCheck::new(fields::YOUTUBE_HIGHLIGHT, video.you_tube_highlight),
        FieldCheck::new(fields::YOUTUBE_COMMENT, video.you_tube_comment),
        FieldCheck::new(fields::YOUTUBE_COMMENT_REPLY, video.you_tube_comment_reply),
        FieldCheck::new(fields::GDE, video.gde),
        FieldCheck::new(fields::REPO, &video.repo),
        FieldCheck::new(fields::NOTIFIED_SPONSORS, video.notified_sponsors),
    ]
}

fn analysis(video: &VideoRecord) -> Vec<FieldCheck> {
    let titles = video
        .titles
        .iter()
        .filter(|t| !t.text.is_empty())
        .map(|t| FieldCheck::qualified(fields::TITLE_SHARE, t.index.to_string(), t.share > 0.0));

    let thumbnails = video
        .thumbnail_variants
        .iter()
        .filter(|v| !v.path.is_empty())
        .map(|v| {
            FieldCheck::qualified(fields::THUMBNAIL_SHARE, v.index.to_string(), v.share > 0.0)
        });

    titles.chain(thumbnails).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidflow_model::{DubbingInfo, TitleVariant};

    #[test]
    fn test_fixed_phase_lengths() {
        let video = VideoRecord::default();
        assert_eq!(phase_checks(Aspect::InitialDetails, &video).len(), 8);
        assert_eq!(phase_checks(Aspect::WorkProgress, &video).len(), 11);
        assert_eq!(phase_checks(Aspect::Definition, &video).len(), 7);
        assert_eq!(phase_checks(Aspect::PostProduction, &video).len(), 8);
        assert_eq!(phase_checks(Aspect::Publishing, &video).len(), 4);
        assert_eq!(phase_checks(Aspect::PostPublish, &video).len(), 11);
    }

    #[test]
    fn test_initial_details_bonus_units() {
        let checks = phase_checks(Aspect::InitialDetails, &VideoRecord::default());
        let bonus: Vec<&str> = checks.iter().filter(|c| c.bonus).map(|c| c.field).collect();
        assert_eq!(bonus.len(), INITIAL_DETAILS_BONUS_UNITS);
        assert_eq!(
            bonus,
            vec![
                fields::SPONSORSHIP_EMAILS,
                fields::SPONSORSHIP_BLOCKED,
                fields::DELAYED
            ]
        );
    }

    #[test]
    fn test_dubbing_checks_per_language() {
        let mut video = VideoRecord::default();
        assert!(phase_checks(Aspect::Dubbing, &video).is_empty());

        video.dubbing.insert("pt".to_string(), DubbingInfo::default());
        video.dubbing.insert("es".to_string(), DubbingInfo::default());
        let labels: Vec<String> = phase_checks(Aspect::Dubbing, &video)
            .iter()
            .map(FieldCheck::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "es.title",
                "es.dubbedVideoPath",
                "es.uploadedVideoId",
                "pt.title",
                "pt.dubbedVideoPath",
                "pt.uploadedVideoId",
            ]
        );
    }

    #[test]
    fn test_analysis_skips_empty_titles() {
        let mut video = VideoRecord::default();
        video.titles = vec![
            TitleVariant {
                index: 1,
                text: "Main".to_string(),
                share: 40.0,
            },
            TitleVariant {
                index: 2,
                text: String::new(),
                share: 0.0,
            },
        ];
        let checks = phase_checks(Aspect::Analysis, &video);
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].label(), "1.titleShare");
        assert_eq!(checks[0].value, FieldValue::Bool(true));
    }
}
