use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use vidflow_utils::StoreError;

/// One line of the video index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub category: String,
    /// Explicit record location, relative to the manuscript directory.
    /// Derived from name and category when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl IndexEntry {
    #[must_use]
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            path: None,
        }
    }

    /// Record path relative to the manuscript directory.
    #[must_use]
    pub fn relative_path(&self) -> String {
        match &self.path {
            Some(path) if !path.trim().is_empty() => path.clone(),
            _ => format!(
                "{}/{}.yaml",
                sanitize_name(&self.category),
                sanitize_name(&self.name)
            ),
        }
    }
}

/// File-system friendly form of a video or category name.
///
/// Lowercases, turns whitespace into `-`, drops everything that is not
/// alphanumeric, `-` or `_`, and collapses runs of `-`.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        let mapped = if ch.is_whitespace() { '-' } else { ch };
        if !(mapped.is_alphanumeric() || mapped == '-' || mapped == '_') {
            continue;
        }
        if mapped == '-' && out.ends_with('-') {
            continue;
        }
        out.extend(mapped.to_lowercase());
    }
    out.trim_matches('-').to_string()
}

/// Read and decode the index file. An empty file is an empty index.
pub fn load_index(path: &Utf8Path) -> Result<Vec<IndexEntry>, StoreError> {
    if !path.exists() {
        return Err(StoreError::IndexNotFound {
            path: path.to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadFailed {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(&content).map_err(|e| StoreError::ParseFailed {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
