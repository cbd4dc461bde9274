//! Project discovery
//!
//! Expands glob patterns into project directories. A directory counts as a
//! project when it contains the settings marker directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::core::SyncResult;
use crate::settings::paths::SETTINGS_DIR;

/// True when the directory carries a settings marker directory
pub fn is_project_dir(path: &Path) -> bool {
    path.join(SETTINGS_DIR).is_dir()
}

/// Expand glob patterns into unique, sorted project directories
///
/// Matches that are not directories, or directories without the marker, are
/// skipped silently. A syntactically invalid pattern is a hard error.
pub fn discover_projects(patterns: &[String]) -> SyncResult<Vec<PathBuf>> {
    let mut found = BTreeSet::new();

    for pattern in patterns {
        for path in glob(pattern)?.filter_map(|entry| entry.ok()) {
            if !path.is_dir() || !is_project_dir(&path) {
                continue;
            }
            let resolved = fs::canonicalize(&path).unwrap_or(path);
            found.insert(resolved);
        }
    }

    tracing::info!(
        "Discovered {} project(s) from {} pattern(s)",
        found.len(),
        patterns.len()
    );
    Ok(found.into_iter().collect())
}
