//! Settings file locations for the three scope tiers

use std::path::{Path, PathBuf};

/// Directory, inside a project root or the home directory, that holds settings
pub const SETTINGS_DIR: &str = ".agent";

/// Shared (checked-in) settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Local-override settings file name
pub const LOCAL_SETTINGS_FILE: &str = "settings.local.json";

/// Default user-global settings path: `~/.agent/settings.json`
pub fn default_user_settings_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Shared settings file for a project directory
pub fn project_settings_path(project: &Path) -> PathBuf {
    project.join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Local-override settings file for a project directory
pub fn local_settings_path(project: &Path) -> PathBuf {
    project.join(SETTINGS_DIR).join(LOCAL_SETTINGS_FILE)
}

/// Resolve an optional user-settings override that may name a file or a
/// settings directory
///
/// - no override: the default user path
/// - existing directory: `<dir>/settings.json`
/// - a `.json` path: used as-is
/// - anything else: treated as a settings directory
pub fn resolve_user_settings_path(override_path: Option<&Path>) -> PathBuf {
    let Some(path) = override_path else {
        return default_user_settings_path();
    };

    if path.is_dir() {
        return path.join(SETTINGS_FILE);
    }
    if path.extension().is_some_and(|ext| ext == "json") {
        return path.to_path_buf();
    }
    path.join(SETTINGS_FILE)
}
