//! Data model for scoped permission rules
//!
//! A rule is identified by `(kind, pattern)` and tracked by a
//! `PermissionRecord` holding its current and load-time scope membership.

pub mod project;
pub mod rule;
pub mod scope;

pub use project::Project;
pub use rule::{PermissionRecord, RuleId, RuleKind};
pub use scope::{Scope, ScopeFlags};
