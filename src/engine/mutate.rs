//! Scope mutations
//!
//! All operations address a record by `(project index, record index)` and
//! are silent no-ops on stale indexes. Only the transitions below may change
//! a record's flags; identity and list position never change. Every user-flag
//! transition is mirrored into the session-wide user list, and promote/demote
//! additionally fan out across sibling projects.

use crate::model::{PermissionRecord, RuleId, Scope, ScopeFlags};

use super::session::Session;

/// Direction of a single promote/demote step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Toward the user tier (collapse target `user`)
    Promote,
    /// Toward the local tier (collapse target `local`)
    Demote,
}

impl Session {
    /// Flip one scope flag on the targeted record
    ///
    /// A user-flag flip is mirrored into the session user list; sibling
    /// projects are not touched by a toggle.
    pub fn toggle_scope(&mut self, project: usize, row: usize, scope: Scope) {
        let Some(record) = self.record_mut(project, row) else {
            return;
        };

        let enabled = !record.scopes.get(scope);
        record.scopes.set(scope, enabled);
        tracing::debug!(
            "Toggled {} {} -> {} on {} \"{}\"",
            scope,
            !enabled,
            enabled,
            record.id.kind,
            record.id.pattern
        );

        if scope == Scope::User {
            let snapshot = record.clone();
            self.sync_user_list(&snapshot);
        }
    }

    /// One promote step: toward `user` along the ring, or collapse to `user`
    pub fn promote(&mut self, project: usize, row: usize) {
        self.step(project, row, StepDirection::Promote);
    }

    /// One demote step: toward `local` along the ring, or collapse to `local`
    pub fn demote(&mut self, project: usize, row: usize) {
        self.step(project, row, StepDirection::Demote);
    }

    /// Clear every scope flag; the record stays visible until save drops it
    ///
    /// Equivalent to demoting to the empty state, including the user-flag
    /// propagation to the session user list and sibling projects.
    pub fn delete_rule(&mut self, project: usize, row: usize) {
        let Some(record) = self.record_mut(project, row) else {
            return;
        };

        let had_user = record.scopes.user;
        record.scopes = ScopeFlags::EMPTY;
        let id = record.id.clone();
        tracing::debug!("Marked {} \"{}\" for deletion", id.kind, id.pattern);

        if had_user {
            self.user_records_mut().retain(|r| r.id != id);
            self.strip_user_elsewhere(project, &id);
        }
    }

    fn step(&mut self, project: usize, row: usize, direction: StepDirection) {
        let Some(record) = self.record_mut(project, row) else {
            return;
        };

        let flags = record.scopes;
        let new_flags = if let Some(scope) = flags.sole_scope() {
            // Single scope cycles along the fixed ring
            match direction {
                StepDirection::Promote => ScopeFlags::single(scope.prev()),
                StepDirection::Demote => ScopeFlags::single(scope.next()),
            }
        } else if flags.is_empty() {
            // Cycling resumes from the empty state instead of staying empty
            match direction {
                StepDirection::Promote => ScopeFlags::single(Scope::Local),
                StepDirection::Demote => ScopeFlags::single(Scope::User),
            }
        } else {
            // Multi-scope state is ambiguous for a single step; collapse to
            // the deterministic extreme
            match direction {
                StepDirection::Promote => ScopeFlags::single(Scope::User),
                StepDirection::Demote => ScopeFlags::single(Scope::Local),
            }
        };

        let had_user = flags.user;
        record.scopes = new_flags;
        let snapshot = record.clone();
        tracing::debug!(
            "Stepped {} \"{}\" {:?} -> user={} project={} local={}",
            snapshot.id.kind,
            snapshot.id.pattern,
            direction,
            new_flags.user,
            new_flags.project,
            new_flags.local
        );

        if new_flags.user == had_user {
            return;
        }

        self.sync_user_list(&snapshot);
        if new_flags.user {
            self.stamp_siblings(project, &snapshot);
        } else {
            self.strip_user_elsewhere(project, &snapshot.id);
        }
    }

    /// Mirror one record's user flag into the session user list
    fn sync_user_list(&mut self, record: &PermissionRecord) {
        let user_records = self.user_records_mut();
        if record.scopes.user {
            if !user_records.iter().any(|r| r.id == record.id) {
                user_records.push(record.clone());
            }
        } else {
            user_records.retain(|r| r.id != record.id);
        }
    }

    /// Copy the new scope state onto sibling records sharing the identity
    fn stamp_siblings(&mut self, source_project: usize, record: &PermissionRecord) {
        let scopes = record.scopes;
        for (index, project) in self.projects_mut().iter_mut().enumerate() {
            if index == source_project {
                continue;
            }
            if let Some(sibling) = project.record_by_id_mut(&record.id) {
                sibling.scopes = scopes;
            }
        }
    }

    /// Clear the user flag on sibling records sharing the identity
    fn strip_user_elsewhere(&mut self, source_project: usize, id: &RuleId) {
        for (index, project) in self.projects_mut().iter_mut().enumerate() {
            if index == source_project {
                continue;
            }
            if let Some(sibling) = project.record_by_id_mut(id) {
                sibling.scopes.set(Scope::User, false);
            }
        }
    }
}
