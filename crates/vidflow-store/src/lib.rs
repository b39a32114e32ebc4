//! Read-only persistence for vidflow.
//!
//! The index (`index.yaml`) lists videos as `{name, category}` pairs. Each
//! video record lives at `<manuscript_dir>/<category>/<file name>.yaml`, where
//! the file name is derived from the video name by [`sanitize_name`].
//!
//! The store never writes. Classification and scoring operate on the decoded
//! [`VideoRecord`](vidflow_model::VideoRecord) snapshots it returns.

pub mod index;
pub mod store;

pub use index::{IndexEntry, load_index, sanitize_name};
pub use store::{LoadedVideos, VideoStore};
