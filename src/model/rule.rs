//! Permission rule identity and per-rule scope tracking

use serde::{Deserialize, Serialize};

use super::scope::{Scope, ScopeFlags};

/// Whether a rule allows or denies the matched action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Allow,
    Deny,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::Allow => write!(f, "allow"),
            RuleKind::Deny => write!(f, "deny"),
        }
    }
}

/// Identity of a permission rule: its kind plus the opaque pattern text
///
/// Identity is the merge and lookup key. It is stable across scope changes;
/// only a record's flags ever move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId {
    pub kind: RuleKind,
    pub pattern: String,
}

impl RuleId {
    /// Create an allow-rule identity
    pub fn allow(pattern: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Allow,
            pattern: pattern.into(),
        }
    }

    /// Create a deny-rule identity
    pub fn deny(pattern: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Deny,
            pattern: pattern.into(),
        }
    }
}

/// In-memory tracking of one rule's scope membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRecord {
    pub id: RuleId,
    /// Scope flags as edited during this session
    pub scopes: ScopeFlags,
    /// Scope flags observed at load time; the baseline for diffs and saves
    pub original: ScopeFlags,
}

impl PermissionRecord {
    /// Create a record first seen in a single scope
    pub fn new(id: RuleId, scope: Scope) -> Self {
        let flags = ScopeFlags::single(scope);
        Self {
            id,
            scopes: flags,
            original: flags,
        }
    }

    /// True when the current flags differ from the load-time flags
    pub fn is_changed(&self) -> bool {
        self.scopes != self.original
    }

    /// True when no scope is enabled; the record is dropped at save time
    pub fn pending_delete(&self) -> bool {
        self.scopes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_scopes() {
        let a = RuleId::allow("Bash(git status:*)");
        let b = RuleId::allow("Bash(git status:*)");
        let c = RuleId::deny("Bash(git status:*)");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_new_record_flags() {
        let record = PermissionRecord::new(RuleId::allow("Read"), Scope::Local);
        assert!(record.scopes.local);
        assert!(!record.scopes.user);
        assert_eq!(record.scopes, record.original);
        assert!(!record.is_changed());
        assert!(!record.pending_delete());
    }

    #[test]
    fn test_changed_and_pending_delete() {
        let mut record = PermissionRecord::new(RuleId::deny("WebFetch"), Scope::Project);
        record.scopes.set(Scope::Project, false);

        assert!(record.is_changed());
        assert!(record.pending_delete());
        // The load-time baseline never moves
        assert!(record.original.project);
    }
}
