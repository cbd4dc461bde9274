//! Session state: the in-memory view of every loaded settings file
//!
//! `user_records` is the authoritative list of identities currently holding
//! the user flag; project records carry synchronized snapshots of it. The
//! mutation engine keeps the two in step on every user-flag transition.

use std::path::{Path, PathBuf};

use crate::model::{PermissionRecord, Project};
use crate::settings::paths;

use super::merge;

/// Everything loaded for one editing session
#[derive(Debug, Clone)]
pub struct Session {
    user_settings_path: PathBuf,
    user_records: Vec<PermissionRecord>,
    projects: Vec<Project>,
}

impl Session {
    /// Load a session for the given project directories
    ///
    /// `user_settings_override` may name the user settings file or its
    /// directory; absent, the per-user default applies. Missing or broken
    /// files read as empty; load itself never fails.
    pub fn load(project_paths: &[PathBuf], user_settings_override: Option<&Path>) -> Session {
        let user_settings_path = paths::resolve_user_settings_path(user_settings_override);
        Self::load_resolved(project_paths, user_settings_path)
    }

    pub(crate) fn load_resolved(project_paths: &[PathBuf], user_settings_path: PathBuf) -> Session {
        let user_records = merge::load_user_records(&user_settings_path);
        let projects: Vec<Project> = project_paths
            .iter()
            .map(|path| merge::load_project(path, &user_records))
            .collect();

        tracing::info!(
            "Loaded {} project(s), {} user-scope rule(s) from {}",
            projects.len(),
            user_records.len(),
            user_settings_path.display()
        );

        Session {
            user_settings_path,
            user_records,
            projects,
        }
    }

    /// Resolved path of the user settings file
    pub fn user_settings_path(&self) -> &Path {
        &self.user_settings_path
    }

    /// All loaded projects, in discovery order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// One project by index
    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// The records of one project; empty for an out-of-range index
    pub fn project_records(&self, index: usize) -> &[PermissionRecord] {
        self.projects
            .get(index)
            .map(|project| project.records.as_slice())
            .unwrap_or_default()
    }

    /// The authoritative user-scope record list
    pub fn user_records(&self) -> &[PermissionRecord] {
        &self.user_records
    }

    /// True when any record in any project differs from its load-time flags
    pub fn has_changes(&self) -> bool {
        self.projects
            .iter()
            .any(|project| project.records.iter().any(|record| record.is_changed()))
    }

    pub(crate) fn record_mut(
        &mut self,
        project: usize,
        row: usize,
    ) -> Option<&mut PermissionRecord> {
        self.projects.get_mut(project)?.records.get_mut(row)
    }

    pub(crate) fn user_records_mut(&mut self) -> &mut Vec<PermissionRecord> {
        &mut self.user_records
    }

    pub(crate) fn projects_mut(&mut self) -> &mut Vec<Project> {
        &mut self.projects
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::{Path, PathBuf};

    use tempfile::TempDir;

    use crate::settings::paths::{LOCAL_SETTINGS_FILE, SETTINGS_DIR, SETTINGS_FILE};

    /// On-disk fixture: a user settings file plus any number of projects
    pub struct Fixture {
        pub temp: TempDir,
        pub user_settings: PathBuf,
    }

    impl Fixture {
        pub fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let user_settings = temp.path().join("user").join(SETTINGS_FILE);
            fs::create_dir_all(temp.path().join("user")).unwrap();
            Fixture {
                temp,
                user_settings,
            }
        }

        pub fn write_user(&self, json: &str) {
            fs::write(&self.user_settings, json).unwrap();
        }

        pub fn add_project(&self, name: &str) -> PathBuf {
            let dir = self.temp.path().join(name);
            fs::create_dir_all(dir.join(SETTINGS_DIR)).unwrap();
            dir
        }

        pub fn write_project_settings(&self, project: &Path, json: &str) {
            fs::write(project.join(SETTINGS_DIR).join(SETTINGS_FILE), json).unwrap();
        }

        pub fn write_local_settings(&self, project: &Path, json: &str) {
            fs::write(project.join(SETTINGS_DIR).join(LOCAL_SETTINGS_FILE), json).unwrap();
        }
    }
}
