//! Save: partition the in-memory model back into per-file payloads
//!
//! Each scope tier gets the records currently holding its flag, minus
//! pending deletions. After every file is written the whole session is
//! reloaded from disk, so the in-memory view always matches what was
//! persisted and `has_changes` returns to false.

use std::path::PathBuf;

use crate::core::SyncResult;
use crate::model::{PermissionRecord, RuleKind, Scope};
use crate::settings::document::RuleLists;
use crate::settings::{paths, store};

use super::session::Session;

impl Session {
    /// Write every tier's settings file and resynchronize from disk
    ///
    /// Writes happen in order: user file, then each project's shared and
    /// local files. A failed write aborts the save and leaves the in-memory
    /// state untouched (`has_changes` stays true); files written before the
    /// failure are not rolled back.
    pub fn save(&mut self) -> SyncResult<()> {
        let user_rules = rule_lists_for(self.user_records(), Scope::User);
        store::write_rules(self.user_settings_path(), &user_rules)?;

        for project in self.projects() {
            let shared = rule_lists_for(&project.records, Scope::Project);
            store::write_rules(&paths::project_settings_path(&project.path), &shared)?;

            let local = rule_lists_for(&project.records, Scope::Local);
            store::write_rules(&paths::local_settings_path(&project.path), &local)?;
        }

        // All writes succeeded: rebuild the session from what is now on disk
        let project_paths: Vec<PathBuf> =
            self.projects().iter().map(|p| p.path.clone()).collect();
        let user_settings_path = self.user_settings_path().to_path_buf();
        *self = Session::load_resolved(&project_paths, user_settings_path);

        tracing::info!("Saved and reloaded {} project(s)", self.projects().len());
        Ok(())
    }
}

/// Collect one tier's allow/deny lists from a record set
///
/// Records without the tier's flag, and records pending deletion, are
/// excluded.
fn rule_lists_for(records: &[PermissionRecord], scope: Scope) -> RuleLists {
    let mut lists = RuleLists::default();
    for record in records {
        if !record.scopes.get(scope) || record.scopes.is_empty() {
            continue;
        }
        match record.id.kind {
            RuleKind::Allow => lists.allow.push(record.id.pattern.clone()),
            RuleKind::Deny => lists.deny.push(record.id.pattern.clone()),
        }
    }
    lists
}
