//! Load-time merge of per-scope rule lists
//!
//! Each settings file contributes a flat list of `(kind, pattern)` entries.
//! The merge walks the per-scope lists in fixed order (local, project, user)
//! and collapses duplicate identities into one record carrying every scope
//! flag any source file established. First-appearance order is preserved and
//! stays fixed for the whole session.

use std::path::Path;

use crate::model::{PermissionRecord, Project, RuleId, Scope};
use crate::settings::document::RuleLists;
use crate::settings::{paths, store};

/// Expand one file's rule lists into single-scope records
///
/// Allow entries come before deny entries, matching the file layout.
pub(crate) fn records_from_rules(rules: &RuleLists, scope: Scope) -> Vec<PermissionRecord> {
    let mut records = Vec::with_capacity(rules.len());
    for pattern in &rules.allow {
        records.push(PermissionRecord::new(RuleId::allow(pattern.clone()), scope));
    }
    for pattern in &rules.deny {
        records.push(PermissionRecord::new(RuleId::deny(pattern.clone()), scope));
    }
    records
}

/// Collapse per-scope record lists into one deduplicated multi-scope list
///
/// The first appearance of an identity fixes its position; later appearances
/// OR their scope into both the current and the original flag sets.
pub(crate) fn merge_records(lists: Vec<Vec<PermissionRecord>>) -> Vec<PermissionRecord> {
    let mut merged: Vec<PermissionRecord> = Vec::new();

    for record in lists.into_iter().flatten() {
        match merged.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => {
                existing.scopes.merge(record.scopes);
                existing.original.merge(record.original);
            }
            None => merged.push(record),
        }
    }

    merged
}

/// Load the user-scope records from the user settings file
pub(crate) fn load_user_records(user_settings_path: &Path) -> Vec<PermissionRecord> {
    records_from_rules(&store::read_rules(user_settings_path), Scope::User)
}

/// Load one project, folding in the session-wide user baseline
pub(crate) fn load_project(path: &Path, user_records: &[PermissionRecord]) -> Project {
    let local_rules = store::read_rules(&paths::local_settings_path(path));
    let project_rules = store::read_rules(&paths::project_settings_path(path));

    let records = merge_records(vec![
        records_from_rules(&local_rules, Scope::Local),
        records_from_rules(&project_rules, Scope::Project),
        user_records.to_vec(),
    ]);

    tracing::debug!("Loaded {} rules for project {}", records.len(), path.display());
    Project::new(path, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScopeFlags;

    fn lists(allow: &[&str], deny: &[&str]) -> RuleLists {
        RuleLists {
            allow: allow.iter().map(|s| s.to_string()).collect(),
            deny: deny.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_extraction_order() {
        let records = records_from_rules(&lists(&["A", "B"], &["C"]), Scope::Local);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, RuleId::allow("A"));
        assert_eq!(records[1].id, RuleId::allow("B"));
        assert_eq!(records[2].id, RuleId::deny("C"));
        assert!(records.iter().all(|r| r.scopes == ScopeFlags::single(Scope::Local)));
    }

    #[test]
    fn test_merge_flag_correctness() {
        // "A" in all three files, "B" in two, "C" in one
        let local = records_from_rules(&lists(&["A", "B", "C"], &[]), Scope::Local);
        let project = records_from_rules(&lists(&["A", "B"], &[]), Scope::Project);
        let user = records_from_rules(&lists(&["A"], &[]), Scope::User);

        let merged = merge_records(vec![local, project, user]);
        assert_eq!(merged.len(), 3);

        let a = &merged[0];
        assert_eq!(a.scopes.enabled_count(), 3);
        let b = &merged[1];
        assert!(b.scopes.local && b.scopes.project && !b.scopes.user);
        let c = &merged[2];
        assert_eq!(c.scopes, ScopeFlags::single(Scope::Local));

        // Original mirrors current at load time
        for record in &merged {
            assert_eq!(record.scopes, record.original);
        }
    }

    #[test]
    fn test_merge_idempotence() {
        let build = || {
            merge_records(vec![
                records_from_rules(&lists(&["A"], &["D"]), Scope::Local),
                records_from_rules(&lists(&["A", "B"], &[]), Scope::Project),
                records_from_rules(&lists(&["B"], &["D"]), Scope::User),
            ])
        };

        let first = build();
        let second = build();
        assert_eq!(first, second);

        // No duplicate identities survive the merge
        for (i, record) in first.iter().enumerate() {
            assert!(!first[i + 1..].iter().any(|other| other.id == record.id));
        }
    }

    #[test]
    fn test_first_appearance_order() {
        // Local entries lead, then project, then user
        let merged = merge_records(vec![
            records_from_rules(&lists(&["L"], &[]), Scope::Local),
            records_from_rules(&lists(&["P", "L"], &[]), Scope::Project),
            records_from_rules(&lists(&["U"], &[]), Scope::User),
        ]);

        let order: Vec<&str> = merged.iter().map(|r| r.id.pattern.as_str()).collect();
        assert_eq!(order, vec!["L", "P", "U"]);

        // "L" picked up the project flag on its existing record
        assert!(merged[0].scopes.local && merged[0].scopes.project);
    }

    #[test]
    fn test_allow_and_deny_are_distinct_identities() {
        let merged = merge_records(vec![
            records_from_rules(&lists(&["X"], &["X"]), Scope::Local),
        ]);
        assert_eq!(merged.len(), 2);
    }
}
