//! Helpers shared by the command handlers.

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use tracing::info;
use vidflow_store::LoadedVideos;

use crate::presentation::{Tone, paint};
use crate::{Config, VideoStore, VidflowError};

pub fn open_store(config: &Config) -> VideoStore {
    VideoStore::new(config.index_path.clone(), config.manuscript_dir.clone())
}

/// Load every indexed video. A missing or malformed index is an error;
/// individual broken records are skipped.
pub fn load_catalogue(config: &Config) -> Result<LoadedVideos> {
    let store = open_store(config);
    let loaded = store.load_all().map_err(VidflowError::from)?;
    info!(
        videos = loaded.videos.len(),
        skipped = loaded.skipped.len(),
        "Catalogue loaded"
    );
    Ok(loaded)
}

/// Reference time for classification.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Names of index entries that could not be loaded.
pub fn skipped_names(loaded: &LoadedVideos) -> Vec<String> {
    loaded
        .skipped
        .iter()
        .map(|(entry, _)| entry.name.clone())
        .collect()
}

/// Report skipped records on stderr.
pub fn report_skipped(loaded: &LoadedVideos, color: bool) {
    if loaded.skipped.is_empty() {
        return;
    }
    eprintln!(
        "{}",
        paint(
            &format!("⚠ Skipped {} record(s):", loaded.skipped.len()),
            Tone::Pending,
            color
        )
    );
    for (entry, err) in &loaded.skipped {
        eprintln!("  {}: {err}", entry.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalogue_skips_missing_records() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::fs::write(
            root.join("index.yaml"),
            "- name: Argo CD\n  category: devops\n- name: Missing\n  category: devops\n",
        )
        .unwrap();
        std::fs::create_dir_all(root.join("manuscript/devops")).unwrap();
        std::fs::write(
            root.join("manuscript/devops/argo-cd.yaml"),
            "uploadVideo: /videos/argo.mp4\nvideoId: abc123\n",
        )
        .unwrap();

        let config = Config {
            index_path: root.join("index.yaml"),
            manuscript_dir: root.join("manuscript"),
            ..Config::default()
        };
        let loaded = load_catalogue(&config).unwrap();
        assert_eq!(loaded.videos.len(), 1);
        assert_eq!(loaded.videos[0].name, "Argo CD");
        assert_eq!(skipped_names(&loaded), vec!["Missing".to_string()]);
    }
}
