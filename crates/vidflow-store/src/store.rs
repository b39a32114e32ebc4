use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};
use vidflow_model::VideoRecord;
use vidflow_utils::StoreError;

use crate::index::{IndexEntry, load_index};

/// Records loaded from the index, plus the entries that failed.
#[derive(Debug, Default)]
pub struct LoadedVideos {
    pub videos: Vec<VideoRecord>,
    pub skipped: Vec<(IndexEntry, StoreError)>,
}

/// Read-only access to the index and the records it points at.
#[derive(Debug, Clone)]
pub struct VideoStore {
    index_path: Utf8PathBuf,
    manuscript_dir: Utf8PathBuf,
}

impl VideoStore {
    #[must_use]
    pub fn new(index_path: impl Into<Utf8PathBuf>, manuscript_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            index_path: index_path.into(),
            manuscript_dir: manuscript_dir.into(),
        }
    }

    #[must_use]
    pub fn index_path(&self) -> &Utf8Path {
        &self.index_path
    }

    #[must_use]
    pub fn manuscript_dir(&self) -> &Utf8Path {
        &self.manuscript_dir
    }

    pub fn load_index(&self) -> Result<Vec<IndexEntry>, StoreError> {
        let entries = load_index(&self.index_path)?;
        debug!(index = %self.index_path, count = entries.len(), "Loaded video index");
        Ok(entries)
    }

    /// Where the record for `entry` lives.
    #[must_use]
    pub fn video_path(&self, entry: &IndexEntry) -> Utf8PathBuf {
        self.manuscript_dir.join(entry.relative_path())
    }

    /// Decode one record file. `path` on the result is set to `path`.
    pub fn load_video(&self, path: &Utf8Path) -> Result<VideoRecord, StoreError> {
        if !path.exists() {
            return Err(StoreError::VideoNotFound {
                path: path.to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let mut video: VideoRecord = if content.trim().is_empty() {
            VideoRecord::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| StoreError::ParseFailed {
                path: path.to_string(),
                reason: e.to_string(),
            })?
        };
        video.path = path.to_string();

        if let Err(err) = video.scheduled_at() {
            warn!(path = %path, date = %err.value, "Unparsable publication date");
        }
        Ok(video)
    }

    /// Load the record for an index entry. Name and category fall back to the
    /// index values when the record leaves them empty.
    pub fn load_entry(&self, entry: &IndexEntry) -> Result<VideoRecord, StoreError> {
        let mut video = self.load_video(&self.video_path(entry))?;
        if video.name.trim().is_empty() {
            video.name.clone_from(&entry.name);
        }
        if video.category.trim().is_empty() {
            video.category.clone_from(&entry.category);
        }
        Ok(video)
    }

    /// Load every indexed record. Failing entries are skipped and reported,
    /// so that one broken file does not hide the rest of the catalogue.
    pub fn load_all(&self) -> Result<LoadedVideos, StoreError> {
        let mut loaded = LoadedVideos::default();
        for entry in self.load_index()? {
            match self.load_entry(&entry) {
                Ok(video) => loaded.videos.push(video),
                Err(err) => {
                    warn!(name = %entry.name, error = %err, "Skipping video");
                    loaded.skipped.push((entry, err));
                }
            }
        }
        debug!(
            loaded = loaded.videos.len(),
            skipped = loaded.skipped.len(),
            "Loaded videos"
        );
        Ok(loaded)
    }
}
