//! Scope tiers and per-rule scope membership

use serde::{Deserialize, Serialize};

/// Precedence tier a permission rule can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Global, applies to every project
    User,
    /// Shared project settings, checked in
    Project,
    /// Per-checkout local override
    Local,
}

impl Scope {
    /// Cycle order for promote/demote
    pub const RING: [Scope; 3] = [Scope::User, Scope::Project, Scope::Local];

    fn ring_index(self) -> usize {
        match self {
            Scope::User => 0,
            Scope::Project => 1,
            Scope::Local => 2,
        }
    }

    /// One ring step toward `user`, wrapping: local -> project -> user -> local
    pub fn prev(self) -> Scope {
        Scope::RING[(self.ring_index() + Scope::RING.len() - 1) % Scope::RING.len()]
    }

    /// One ring step toward `local`, wrapping: user -> project -> local -> user
    pub fn next(self) -> Scope {
        Scope::RING[(self.ring_index() + 1) % Scope::RING.len()]
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::User => write!(f, "user"),
            Scope::Project => write!(f, "project"),
            Scope::Local => write!(f, "local"),
        }
    }
}

/// Membership of one rule across the three scope tiers
///
/// Zero, one, or all three flags may be set. A rule with no flags set is
/// pending deletion and will be dropped at save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScopeFlags {
    pub user: bool,
    pub project: bool,
    pub local: bool,
}

impl ScopeFlags {
    /// No scope membership at all (pending deletion)
    pub const EMPTY: ScopeFlags = ScopeFlags {
        user: false,
        project: false,
        local: false,
    };

    /// Flags with exactly one scope enabled
    pub fn single(scope: Scope) -> Self {
        let mut flags = ScopeFlags::EMPTY;
        flags.set(scope, true);
        flags
    }

    /// Read one flag
    pub fn get(&self, scope: Scope) -> bool {
        match scope {
            Scope::User => self.user,
            Scope::Project => self.project,
            Scope::Local => self.local,
        }
    }

    /// Write one flag
    pub fn set(&mut self, scope: Scope, enabled: bool) {
        match scope {
            Scope::User => self.user = enabled,
            Scope::Project => self.project = enabled,
            Scope::Local => self.local = enabled,
        }
    }

    /// OR another flag set into this one
    pub fn merge(&mut self, other: ScopeFlags) {
        self.user |= other.user;
        self.project |= other.project;
        self.local |= other.local;
    }

    /// Number of enabled scopes
    pub fn enabled_count(&self) -> usize {
        usize::from(self.user) + usize::from(self.project) + usize::from(self.local)
    }

    /// True when no scope is enabled
    pub fn is_empty(&self) -> bool {
        !self.user && !self.project && !self.local
    }

    /// The single enabled scope, if exactly one flag is set
    pub fn sole_scope(&self) -> Option<Scope> {
        if self.enabled_count() != 1 {
            return None;
        }
        Scope::RING.into_iter().find(|scope| self.get(*scope))
    }
}
