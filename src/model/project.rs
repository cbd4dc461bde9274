//! A discovered project and its merged permission records

use std::path::{Path, PathBuf};

use super::rule::{PermissionRecord, RuleId};

/// One project directory with the rules merged from all three scope tiers
///
/// `records` keeps the order assigned at load time (local entries, then
/// project, then user, deduplicated by identity). Mutations change flags in
/// place; positions never move, so the selection cursor stays put while a
/// rule's scopes change.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
    pub records: Vec<PermissionRecord>,
}

impl Project {
    /// Create a project named after the final path component
    pub fn new(path: impl Into<PathBuf>, records: Vec<PermissionRecord>) -> Self {
        let path = path.into();
        Self {
            name: project_name(&path),
            path,
            records,
        }
    }

    /// Position of the record with the given identity, if present
    pub fn position_of(&self, id: &RuleId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }

    /// Mutable record lookup by identity
    pub(crate) fn record_by_id_mut(&mut self, id: &RuleId) -> Option<&mut PermissionRecord> {
        self.records.iter_mut().find(|record| &record.id == id)
    }
}

/// Display name for a project path
pub(crate) fn project_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
